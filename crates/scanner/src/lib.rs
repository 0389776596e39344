//! axe-scan scanner - Drive a headless browser and run axe-core on each page.

pub mod axe_source;
pub mod browser;
pub mod scan;
pub mod urls;

pub use axe_source::{AxeSource, DEFAULT_AXE_SOURCE};
pub use browser::{ChromeOptions, ChromeScanner, PageScanner, ScanOptions};
pub use scan::scan_urls;
pub use urls::{parse_url_list, read_url_list};
