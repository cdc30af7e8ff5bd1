pub(crate) mod generate;
pub(crate) mod inspect;
