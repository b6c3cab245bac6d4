pub(crate) mod calendar_token;
pub(crate) mod parsed_data;
pub(crate) mod push;
