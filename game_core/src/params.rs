/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Canvas
    pub const CANVAS_WIDTH: i32 = 800;
    pub const CANVAS_HEIGHT: i32 = 600;
    pub const MAX_CANVAS_SIZE: i32 = 1 << 15;

    // Paddle
    pub const PADDLE_WIDTH: i32 = 20;
    pub const PADDLE_HEIGHT: i32 = 80;
    pub const PADDLE_SPEED: i32 = 5; // pixels per tick
    pub const COMPUTER_STEP: i32 = 4; // pixels per tick, slower than a human
    pub const LEFT_PADDLE_X: i32 = 14;
    pub const RIGHT_PADDLE_X: i32 = 760;
    pub const PADDLE_START_Y: i32 = 240;

    // Ball
    pub const BALL_DIAMETER: i32 = 20;
    pub const BALL_START_X: i32 = 400;
    pub const BALL_START_Y: i32 = 300;
    pub const BALL_VELOCITY_X: i32 = 4;
    pub const BALL_VELOCITY_Y: i32 = 3;

    // Scheduling
    pub const TICK_MS: f64 = 10.0;
    pub const MAX_TICKS_PER_FRAME: u32 = 10; // drop backlog beyond this

    // Presentation
    pub const BORDER_STROKE: f64 = 8.0;
    pub const DIVIDER_STROKE: f64 = 3.0;
    pub const SCORE_FONT_SIZE: u32 = 40;
    pub const TITLE_FONT_SIZE: u32 = 40;
    pub const INSTRUCTION_FONT_SIZE: u32 = 20;

    pub const DEFAULT_SEED: u64 = 12345;
}
