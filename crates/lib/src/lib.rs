pub mod cli;
pub mod input;
mod macros;

#[doc(hidden)]
#[cfg_attr(prod, path = "env/embed.rs")]
#[cfg_attr(not(prod), path = "env/disk.rs")]
pub mod env;

#[doc(hidden)]
pub mod macro_support {
    pub use anyhow::Error;
}

pub mod prelude {
    //! Helper prelude with useful imports.
    pub use crate::input::{Ends, IStr};
    pub use anyhow::{anyhow, bail, ensure, Context, Result};
    pub use log::{debug, info, warn};
}
