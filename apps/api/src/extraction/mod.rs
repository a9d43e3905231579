// Resume content extraction: header vocabulary, the line-scan classifier,
// and the document text boundary. Handlers never classify text directly;
// everything goes through this module.

pub mod patterns;
pub mod sections;
pub mod text_source;
