use std::{fs, path::Path};

const DEFAULT_CONFIG: &str = r#"# Address of the hosted document table (PostgREST endpoint root).
store_url = ""
# Public (anon) access key sent with every query.
store_anon_key = ""
documents_table = "legal_documents"
bind_address = "0.0.0.0:3000"
"#;

// The frontend embeds config.toml with include_str, so it has to exist before compiling.
fn main() {
    let path = Path::new("config.toml");

    if !path.exists() {
        if let Err(e) = fs::write(path, DEFAULT_CONFIG) {
            println!("cargo:warning=could not create config.toml: {e}");
        }
    }

    println!("cargo:rerun-if-changed=config.toml");
}
