use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("PDF generation error: {0}")]
    Pdf(String),
    #[error("layout error: {0}")]
    Layout(String),
    #[error("other rendering error: {0}")]
    Other(String),
}
