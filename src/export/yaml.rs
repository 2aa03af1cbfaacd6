//! YAML output, human-readable alternative to JSON

use std::io::Write;

use serde::Serialize;

use super::export_error;
use crate::error::HomekeeperResult;

pub fn write_yaml<W: Write, T: Serialize + ?Sized>(writer: &mut W, value: &T) -> HomekeeperResult<()> {
    serde_yaml::to_writer(writer, value).map_err(export_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::MENU;

    #[test]
    fn test_menu_as_yaml() {
        let mut out = Vec::new();
        write_yaml(&mut out, MENU).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("label: 가계부"));
        assert!(text.contains("path: /budget"));
    }
}
