mod composite_file_loader;
mod literal_text_scanner;
mod mock_file_loader;
mod pdf_adapter;
mod plain_text_adapter;

pub use composite_file_loader::CompositeFileLoader;
pub use literal_text_scanner::{extract_literal_text, scan_balanced_runs, scan_literal_runs};
pub use mock_file_loader::MockFileLoader;
pub use pdf_adapter::PdfAdapter;
pub use plain_text_adapter::PlainTextAdapter;
