pub mod event;
pub mod report_data;
pub mod uninstall;

pub use event::ReportEvent;
pub use report_data::ReportData;
