use ethers::types::Bytes;

#[derive(Debug, Clone, PartialEq)]
pub struct ViewResult {
    pub return_data: Bytes,
}

impl From<Bytes> for ViewResult {
    fn from(return_data: Bytes) -> Self {
        Self { return_data }
    }
}
