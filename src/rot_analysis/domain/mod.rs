pub mod category;
pub mod counters;
pub mod package_info;
pub mod query;
pub mod rot_result;

pub use category::Category;
pub use counters::{CategoryCounters, OutdatedVersions};
pub use package_info::{PackageInfo, MANIFEST_FILE_NAME};
pub use query::{default_npm_command, PackageManagerQuery};
pub use rot_result::RotResult;
