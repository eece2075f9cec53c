pub mod constants;
pub mod doubles;
pub mod factories;

#[allow(unused_imports)]
pub use constants::*;
#[allow(unused_imports)]
pub use doubles::*;
#[allow(unused_imports)]
pub use factories::*;
