// Logical drawing surface. Every position in the core is in these units;
// the frontend scales them to whatever it renders on.
pub const SCREEN_WIDTH: i32 = 864;
pub const SCREEN_HEIGHT: i32 = 936;
pub const HALF_SCREEN_WIDTH: i32 = SCREEN_WIDTH / 2;
pub const HALF_SCREEN_HEIGHT: i32 = SCREEN_HEIGHT / 2;

// Ground strip
pub const GROUND_Y_POS: i32 = 768;

// Bird
pub const BIRD_WIDTH: i32 = 51;
pub const BIRD_HEIGHT: i32 = 36;
pub const BIRD_INITIAL_X: i32 = 100;
pub const BIRD_INITIAL_Y: i32 = HALF_SCREEN_HEIGHT - 100;
pub const BIRD_FRAME_COUNT: usize = 3;
/// Bird angle while lying on the ground after a crash.
pub const CRASHED_BIRD_ANGLE: f64 = -90.0;

// Pipes
pub const PIPE_WIDTH: i32 = 78;
pub const PIPE_HEIGHT: i32 = 560;

// HUD
pub const SCORE_Y_POS: i32 = 40;
pub const HIGH_SCORE_Y_POS: i32 = 40;
pub const HIGH_SCORE_X_OFFSET: i32 = 20;
pub const FINAL_SCORE_POS: (i32, i32) = (350, 200);
pub const FINAL_HIGH_SCORE_POS: (i32, i32) = (350, 250);

// Menu artwork: unscaled image size, center, scale factor
pub const TITLE_SIZE: (i32, i32) = (270, 60);
pub const TITLE_CENTER: (i32, i32) = (HALF_SCREEN_WIDTH, 150);
pub const TITLE_SCALE: f64 = 2.0;

pub const START_BUTTON_SIZE: (i32, i32) = (240, 105);
pub const EXIT_BUTTON_SIZE: (i32, i32) = (240, 105);
pub const RESUME_BUTTON_SIZE: (i32, i32) = (240, 105);
pub const RESTART_BUTTON_SIZE: (i32, i32) = (120, 42);

pub const TITLE_START_CENTER: (i32, i32) = (HALF_SCREEN_WIDTH, HALF_SCREEN_HEIGHT - 130);
pub const TITLE_EXIT_CENTER: (i32, i32) = (HALF_SCREEN_WIDTH, HALF_SCREEN_HEIGHT + 50);
pub const TITLE_BUTTON_SCALE: f64 = 0.8;

pub const PAUSE_RESUME_CENTER: (i32, i32) = (HALF_SCREEN_WIDTH, HALF_SCREEN_HEIGHT - 150);
pub const PAUSE_EXIT_CENTER: (i32, i32) = (HALF_SCREEN_WIDTH, HALF_SCREEN_HEIGHT + 50);
pub const PAUSE_BUTTON_SCALE: f64 = 0.8;

pub const GAME_OVER_RESTART_CENTER: (i32, i32) = (HALF_SCREEN_WIDTH, HALF_SCREEN_HEIGHT - 100);
pub const GAME_OVER_RESTART_SCALE: f64 = 1.5;
pub const GAME_OVER_EXIT_CENTER: (i32, i32) = (HALF_SCREEN_WIDTH, HALF_SCREEN_HEIGHT);
pub const GAME_OVER_EXIT_SCALE: f64 = 0.5;

// Terminal frontend
pub const MIN_TERMINAL_COLS: u16 = 40;
pub const MIN_TERMINAL_ROWS: u16 = 16;
pub const DATA_DIR_NAME: &str = ".flappy";
pub const CONFIG_FILE_NAME: &str = "config.json";
