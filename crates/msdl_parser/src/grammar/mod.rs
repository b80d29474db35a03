mod msdl;

pub(crate) use msdl::parse_specification;
