mod issue_response;

pub use issue_response::Issue;
pub use issue_response::Label;
