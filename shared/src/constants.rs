// Constants used in the game and shared across libraries.

/// Cube geometry and turn animation
pub mod cube_constants {
    // Angular speed of a face turn, degrees per second.
    pub const TURN_SPEED_DEG: f32 = 45.0;

    // A face turn always stops after exactly this many degrees.
    pub const QUARTER_TURN_DEG: f32 = 90.0;

    // Distance from the center beyond which a piece belongs to an outer slice (one cube width).
    pub const SLICE_THRESHOLD: f32 = 1.0;

    // Distance between neighbouring cubie centers. Must be larger than SLICE_THRESHOLD.
    pub const CUBIE_SPACING: f32 = 1.1;
    pub const CUBIE_SIZE: f32 = 1.0;

    // Stickers sit slightly proud of the cubie surface
    pub const STICKER_SIZE: f32 = 0.85;
    pub const STICKER_THICKNESS: f32 = 0.02;

    // Number of pieces in one outer slice of a 3x3x3 cube.
    pub const PIECES_PER_FACE: usize = 9;
    // Rotatable pieces (27 minus the hidden center) and face centers.
    pub const ROTATABLE_PIECES: usize = 26;
    pub const MIDDLE_PIECES: usize = 6;

    // Sticker colors: Front, Back, Up, Down, Left, Right
    pub const FACE_COLORS: [[f32; 4]; 6] = [
        [0.0, 0.62, 0.38, 1.0], // green
        [0.0, 0.27, 0.68, 1.0], // blue
        [1.0, 1.0, 1.0, 1.0],   // white
        [1.0, 0.84, 0.0, 1.0],  // yellow
        [1.0, 0.35, 0.0, 1.0],  // orange
        [0.72, 0.07, 0.2, 1.0], // red
    ];
    pub const CUBIE_COLOR: [f32; 4] = [0.05, 0.05, 0.05, 1.0];
}

/// Generic game constants
pub mod game_constants {
    // Seed for the scramble generator.
    pub const SEED: u64 = 69;

    pub const SCRAMBLE_LENGTH: usize = 20;

    // Played once at startup, then undone.
    pub const STARTUP_SEQUENCE: &str = "F B U D L R F' B' U' D' L' R'";

    // Configuration file looked up in the working directory
    pub const CONFIG_FILE: &str = "cube.toml";
    pub const CONFIG_ENV_VAR: &str = "CUBE_CONFIG";
}

/// 3D camera
pub mod camera_3d_constants {
    pub const CAMERA_3D_INITIAL_X: f32 = 6.0;
    pub const CAMERA_3D_INITIAL_Y: f32 = 5.0;
    pub const CAMERA_3D_INITIAL_Z: f32 = 8.0;

    pub const CAMERA_3D_SPEED_ROTATE: f32 = 1.5; // rad/s
    pub const CAMERA_3D_SPEED_ZOOM: f32 = 6.0; // units/s

    // Radius range for the camera's orbit.
    pub const CAMERA_3D_MIN_RADIUS: f32 = 6.0;
    pub const CAMERA_3D_MAX_RADIUS: f32 = 25.0;
}

/// Lighting constants
pub mod lighting_constants {
    #[cfg(target_arch = "wasm32")]
    pub const SHADOWS_ENABLED: bool = false; // shadow artifacts on WASM
    #[cfg(not(target_arch = "wasm32"))]
    pub const SHADOWS_ENABLED: bool = true;

    pub const POINT_LIGHT_INTENSITY: f32 = 2_000_000.0;
    pub const GLOBAL_AMBIENT_LIGHT_INTENSITY: f32 = 400.0;
}
