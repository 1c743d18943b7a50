//! Declaration of the modules for the cube game.

/// Command handler turning player input into queued face turns
pub mod command_handler;

/// Various utility functions, constants, and objects
pub mod utils {
    pub mod camera;
    pub mod config;
    pub mod debug_functions;
    pub mod game_functions;
    pub mod macros;
    pub mod objects;
    pub mod scramble;
    pub mod setup;
    pub mod systems_logic;
}
