use crate::ada::literal::to_ada_string;
use crate::models::Registry;

/// Render the Ada package specification for one registry.
///
/// `names` are the enumeration literals produced by
/// [`IdentValidator::validate`](crate::ada::ident::IdentValidator::validate), parallel to
/// `registry.entries`. The output depends only on the arguments.
pub fn emit(prefix: &str, registry: &Registry, names: &[String]) -> String {
    debug_assert_eq!(names.len(), registry.entries.len());

    let package = format!("{}.{}", prefix, registry.kind.package());
    let mut out = String::new();

    out.push_str(&format!("package {} is\n\n", package));
    out.push_str("   pragma Style_Checks (Off); --  Generated code\n\n");
    out.push_str(&format!(
        "   Version : constant String :={};\n\n",
        to_ada_string(&registry.version)
    ));

    out.push_str("   type Id is (\n");
    for (i, name) in names.iter().enumerate() {
        out.push_str(&format!("               {}{}\n", name, separator(i, names.len())));
    }
    out.push('\n');

    out.push_str("   type String_Access is not null access constant String;\n");
    let ids = registry.entries.iter().map(|e| e.id.as_str());
    push_table(&mut out, "Img_Ptr", names, ids);
    out.push_str("   function Img (I : Id) return String\n");
    out.push_str("   is (Img_Ptr (I).all);\n\n");

    let display_names = registry.entries.iter().map(|e| e.name.as_str());
    push_table(&mut out, "Name_Ptr", names, display_names);
    out.push_str("   function Name (I : Id) return String\n");
    out.push_str("   is (Name_Ptr (I).all);\n\n");

    out.push_str("   function Valid_Id (Str : String) return Boolean;\n");
    out.push_str("   function From_Id (Str : String) return Id;\n\n");
    out.push_str(&format!("end {};\n", package));
    out
}

/// One `array (Id) of String_Access` aggregate, followed by a blank line.
fn push_table<'a>(
    out: &mut String,
    table: &str,
    names: &[String],
    values: impl Iterator<Item = &'a str>,
) {
    out.push_str(&format!(
        "   {} : constant array (Id) of String_Access :=\n",
        table
    ));
    out.push_str("     (\n");
    for (i, (name, value)) in names.iter().zip(values).enumerate() {
        out.push_str(&format!(
            "      {} => new String'({}){}\n",
            name,
            to_ada_string(value),
            separator(i, names.len())
        ));
    }
    out.push('\n');
}

/// Aggregate and enumeration items end with `,`, except the last which closes the list.
fn separator(index: usize, len: usize) -> &'static str {
    if index + 1 == len {
        ");"
    } else {
        ","
    }
}
