//! Claude `permissions` object

use crate::error::PermissionsGenResult;
use crate::types::PermissionSet;

/// Pretty-print the permission set with two-space indentation.
pub fn render_permission_set(permissions: &PermissionSet) -> PermissionsGenResult<String> {
    Ok(serde_json::to_string_pretty(permissions)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RenderedBlock;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_permission_set_key_order() {
        let permissions = PermissionSet {
            allow: vec!["a".to_string()],
            ..Default::default()
        };
        let json = render_permission_set(&permissions).unwrap();
        assert_eq!(
            json,
            [
                "{",
                "  \"allow\": [",
                "    \"a\"",
                "  ],",
                "  \"ask\": [],",
                "  \"deny\": [],",
                "  \"additionalDirectories\": []",
                "}",
            ]
            .join("\n")
        );

        let block = RenderedBlock::from_json(json).unwrap();
        assert_eq!(
            block.inner_lines,
            vec![
                "\"allow\": [",
                "  \"a\"",
                "],",
                "\"ask\": [],",
                "\"deny\": [],",
                "\"additionalDirectories\": []",
            ]
        );
    }
}
