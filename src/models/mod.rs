pub mod bs;
pub mod normal;

pub use bs::Greeks;
pub use normal::{normal_cdf, normal_pdf};
