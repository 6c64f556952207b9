pub mod ports;

#[cfg(test)]
pub(crate) mod test_support;
