// src/config/consts.rs

// Source page
pub const SOURCE_URL: &str = "https://www.basketball-reference.com/leagues/NBA_2023_per_game.html";

// Player-name cells. Both conditions matter: data-stat must be "player"
// and csk must be present (any value).
pub const PLAYER_CELL_SELECTOR: &str = "tr td[data-stat='player'][csk]";

// Storage
pub const DATABASE_PATH: &str = "players.db";
pub const TABLE_NAME: &str = "players";
pub const INDEX_COLUMN: &str = "index";
pub const COLUMN_LABEL: &str = "0";

// Console preview
pub const MAX_DISPLAY_ROWS: usize = 60;
pub const DISPLAY_EDGE_ROWS: usize = 5;
