//! Call-site capture for assertions and scopes.
//!
//! - `require!(tree, cond)` / `require!(tree, "label", cond)`: strict assertion
//! - `check!(tree, cond)` / `check!(tree, "label", cond)`: soft assertion
//! - `section!(tree, "name", { ... })`: runs the block inside a named segment
//!
//! Without a label, the condition's source text is used. The condition is
//! wrapped in a closure and only evaluated if the current segment has not
//! already failed.

#[macro_export]
macro_rules! require {
    ($tree:expr, $label:expr, $cond:expr $(,)?) => {
        $tree.require(
            $label,
            $crate::SourceLocation::new(file!(), line!()),
            || $cond,
        )
    };
    ($tree:expr, $cond:expr $(,)?) => {
        $crate::require!($tree, stringify!($cond), $cond)
    };
}

#[macro_export]
macro_rules! check {
    ($tree:expr, $label:expr, $cond:expr $(,)?) => {
        $tree.check(
            $label,
            $crate::SourceLocation::new(file!(), line!()),
            || $cond,
        )
    };
    ($tree:expr, $cond:expr $(,)?) => {
        $crate::check!($tree, stringify!($cond), $cond)
    };
}

/// Inside the block, `$tree` names the scoped tree; the scope ends with the block.
#[macro_export]
macro_rules! section {
    ($tree:ident, $name:expr, $body:block) => {{
        let mut scope = $tree.enter($name);
        #[allow(unused_variables)]
        let $tree: &mut $crate::TestTree = &mut scope;
        $body
    }};
}

#[cfg(test)]
mod tests {
    use crate::{Options, Outcome, TestTree};

    #[test]
    fn label_defaults_to_condition_text() {
        let mut tree = TestTree::new(Options::plain());
        require!(tree, 1 + 1 == 2);
        check!(tree, "named", true);

        let labels: Vec<&str> = tree.root().tasks().map(|task| task.label()).collect();
        assert_eq!(labels, ["1 + 1 == 2", "named"]);
    }

    #[test]
    fn location_is_the_call_site() {
        let mut tree = TestTree::new(Options::plain());
        let line = line!() + 1;
        require!(tree, false);

        let task = tree.root().tasks().next().unwrap();
        assert_eq!(task.location().line, line);
        assert!(task.location().file.ends_with("macros.rs"));
    }

    #[test]
    fn section_scopes_the_block() {
        let mut tree = TestTree::new(Options::plain());
        section!(tree, "outer", {
            assert_eq!(tree.depth(), 2);
            section!(tree, "inner", {
                let depth = tree.depth();
                require!(tree, depth == 3);
            });
        });
        assert_eq!(tree.depth(), 1);
        assert_eq!(tree.outcome(), Outcome::Passed);
    }
}
