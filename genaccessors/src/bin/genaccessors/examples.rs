#[derive(Clone, Copy)]
pub struct ExampleGroup {
    pub title: &'static str,
    pub commands: &'static [&'static str],
}

pub const EXAMPLES: &[ExampleGroup] = &[
    ExampleGroup {
        title: "Generate",
        commands: &[
            "genaccessors                                   # Print the module for the built-in fields",
            "genaccessors > src/GenAccessors.elm            # Redirect it into the Elm sources",
            "genaccessors -f name -f email                  # Generate accessors for other fields",
        ],
    },
    ExampleGroup {
        title: "Files and Config",
        commands: &[
            "genaccessors -o src/GenAccessors.elm           # Write the file only when it changed",
            "genaccessors -c elm/genaccessors.toml          # Use a specific config file",
            "genaccessors --strict -f newJob -f title       # Reject invalid or duplicate names",
        ],
    },
];
