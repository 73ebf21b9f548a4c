use indoc::indoc;

use crate::javadoc::clean;

#[test]
fn single_line() {
    assert_eq!(clean("/** Returns the id. */"), ["Returns the id."]);
}

#[test]
fn multi_line_keeps_inner_blank_and_tags() {
    let comment = indoc! {"
        /**
         * Shifts the position up.
         *
         * @param n The number of blocks.
         * @return The new position.
         */"};
    assert_eq!(
        clean(comment),
        [
            "",
            "Shifts the position up.",
            "",
            "@param n The number of blocks.",
            "@return The new position.",
            "",
        ]
    );
}

#[test]
fn keeps_indentation_after_gutter() {
    let comment = "/**\n * Example:\n *     api.run();\n */";
    assert_eq!(clean(comment), ["", "Example:", "    api.run();", ""]);
}

#[test]
fn lines_without_gutter() {
    let comment = "/**\n   Plain line\n*/";
    assert_eq!(clean(comment), ["", "Plain line"]);
}
