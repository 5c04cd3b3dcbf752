//! Core game constants

use std::num::NonZeroUsize;

/// Bucket count of the suspect table unless configured otherwise
pub const DEFAULT_BUCKET_COUNT: NonZeroUsize = NonZeroUsize::new(10).unwrap();

/// Messages kept in the scrollback
pub const DEFAULT_MSG_HISTORY: usize = 20;

/// Name of the rc file inside the config directory
pub const OPTIONS_FILE_NAME: &str = "dqrc";

/// Directory under the platform config dir holding our files
pub const CONFIG_DIR_NAME: &str = "detective-quest";
