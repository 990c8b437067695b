//! Snapshot tests for whole generated modules.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use pyblock_codegen::{
    DeclarationBlock, DeclarationBlockConfig, DeclarationKind, EnumMember, StringValueNode,
    render_enum_members,
};

fn module(declarations: &[DeclarationBlock]) -> String {
    declarations
        .iter()
        .map(DeclarationBlock::string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_schema_module() {
    let config = DeclarationBlockConfig::default();
    let members = [
        EnumMember::new("ADMIN", "\"ADMIN\"").comment("Full access"),
        EnumMember::new("GUEST", "\"GUEST\""),
    ];

    let declarations = [
        DeclarationBlock::new(config.clone())
            .as_kind(DeclarationKind::Enum)
            .with_name("Role")
            .with_block(render_enum_members(&members, &config)),
        DeclarationBlock::new(config.clone())
            .as_kind(DeclarationKind::Plain)
            .with_name("User")
            .with_decorator("@dataclass")
            .with_comment(StringValueNode::new("A registered user.\nNever */ deleted."))
            .with_block("    id: str\n    role: Role"),
        DeclarationBlock::new(config.clone())
            .as_kind(DeclarationKind::Union)
            .with_name("SearchResult")
            .with_comment("Anything search can return")
            .with_content("User, Role"),
        DeclarationBlock::new(config)
            .as_kind(DeclarationKind::Scalar)
            .with_name("DateTime")
            .with_block("    pass"),
    ];

    insta::assert_snapshot!("schema_module", module(&declarations));
}
