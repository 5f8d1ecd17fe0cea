pub mod declaration;
pub mod expression;
pub mod lexical;
pub mod object;
pub mod types;

pub use declaration::*;
pub use expression::*;
pub use lexical::*;
pub use object::*;
pub use types::*;
