pub mod appearance;
pub mod constants;
pub mod debounce;
pub mod input;
pub mod lifecycle;
pub mod pool;
pub mod token;

pub use appearance::*;
pub use constants::*;
pub use debounce::*;
pub use input::*;
pub use lifecycle::*;
pub use pool::*;
pub use token::*;
