//! The built-in suite run by the `testkit` binary.

use crate::TestTree;

/// Records the demonstration suite into `tree`. With `with_failures`, the
/// "Arithmetic" and "Strings" segments each get a failing strict assertion.
pub fn record_suite(tree: &mut TestTree, with_failures: bool) {
    crate::section!(tree, "Arithmetic", {
        crate::require!(tree, 2 + 2 == 4);
        crate::require!(tree, "multiplication distributes", 3 * (4 + 5) == 3 * 4 + 3 * 5);
        if with_failures {
            crate::require!(tree, 1 == 2);
        }
        crate::require!(tree, 7 % 3 == 1);
    });

    crate::section!(tree, "Strings", {
        let greeting = String::from("hello world");
        crate::check!(tree, greeting.starts_with("hello"));

        crate::section!(tree, "Splitting", {
            let words: Vec<&str> = greeting.split(' ').collect();
            crate::require!(tree, words.len() == 2);
            crate::require!(tree, words == ["hello", "world"]);
        });

        crate::section!(tree, "Case", {
            crate::require!(tree, greeting.to_uppercase() == "HELLO WORLD");
            if with_failures {
                crate::require!(tree, "capitalized", greeting.starts_with('H'));
            }
            crate::require!(tree, greeting.to_lowercase() == greeting);
        });
    });

    crate::section!(tree, "Collections", {
        let mut values = vec![3, 1, 2];
        values.sort_unstable();
        crate::require!(tree, values == [1, 2, 3]);
        crate::check!(tree, values.iter().sum::<i32>() == 6);
    });
}
