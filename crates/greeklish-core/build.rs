const EMBEDDED: [(&str, &str); 2] = [
    (
        "src/default_settings.toml",
        include_str!("src/default_settings.toml"),
    ),
    (
        "src/table/default_greeklish.toml",
        include_str!("src/table/default_greeklish.toml"),
    ),
];

fn main() {
    for (path, content) in EMBEDDED {
        println!("cargo:rerun-if-changed={path}");
        if let Err(e) = content.parse::<toml::Value>() {
            panic!("embedded file {path} is not valid TOML: {e}");
        }
    }
}
