use anyhow::Result;

use crate::trx_format::name::{string_to_name, validate_name};

pub fn describe_name(name: &str) -> Result<String> {
    validate_name(name)?;
    let value = string_to_name(name)?;
    Ok(format!("{name} = {value} (0x{value:016x})"))
}

pub fn print_name(name: &str) -> Result<()> {
    println!("{}", describe_name(name)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::describe_name;

    #[test]
    fn describes_valid_names() {
        assert_eq!(
            describe_name("xmax").expect("name"),
            format!("xmax = {} (0xec8dd00000000000)", 0xec8d_d000_0000_0000u64)
        );
        assert!(describe_name("not_a_name").is_err());
    }
}
