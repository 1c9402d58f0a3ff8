use indexmap::IndexMap;
use serde::Serialize;

use crate::domain::ProjectName;
use crate::error::Result;

/// Relative path (using `/` separators) to file content, in write order.
pub type FileManifest = IndexMap<String, String>;

/// Everything the templates are interpolated with.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaffoldOptions {
    pub name: ProjectName,
    pub description: String,
    pub license: String,
    /// Branch whose pushes trigger the publish workflow
    pub branch: String,
}

impl ScaffoldOptions {
    pub fn new(name: ProjectName, description: impl Into<String>) -> Self {
        ScaffoldOptions {
            name,
            description: description.into(),
            license: "ISC".to_string(),
            branch: "main".to_string(),
        }
    }
}

#[derive(Serialize)]
struct DenoJson<'a> {
    name: &'a str,
    version: &'a str,
    license: &'a str,
    exports: &'a str,
    exclude: [&'a str; 2],
}

#[derive(Serialize)]
struct EditorSettings {
    #[serde(rename = "deno.enable")]
    deno_enable: bool,
    #[serde(rename = "typescript.tsserver.experimental.enableProjectDiagnostics")]
    project_diagnostics: bool,
}

/// Builds the starter files for a new package.
pub fn build_file_manifest(options: &ScaffoldOptions) -> Result<FileManifest> {
    let name = options.name.as_str();
    let mut files = FileManifest::new();

    files.insert(
        "deno.json".to_string(),
        serde_json::to_string_pretty(&DenoJson {
            name,
            version: "0.0.0",
            license: &options.license,
            exports: "./mod.ts",
            exclude: [".github/", ".gitignore"],
        })?,
    );
    files.insert(
        "mod.ts".to_string(),
        format!("console.log(\"Hello from {}!\");", name),
    );
    files.insert("mod_test.ts".to_string(), MOD_TEST.to_string());
    files.insert("README.md".to_string(), readme(options));
    files.insert(".gitignore".to_string(), [".env", ".DS_Store"].join("\n"));
    files.insert(
        ".vscode/settings.json".to_string(),
        serde_json::to_string(&EditorSettings {
            deno_enable: true,
            project_diagnostics: false,
        })?,
    );
    files.insert(".vscode/.gitignore".to_string(), "*".to_string());
    files.insert(
        ".github/workflows/publish.yaml".to_string(),
        PUBLISH_WORKFLOW.replace("{branch}", &options.branch),
    );

    Ok(files)
}

fn readme(options: &ScaffoldOptions) -> String {
    format!(
        "# {name}\n\n{description}\n\n## Example\n\n```ts\nimport \"jsr:{name}\";\n```",
        name = options.name,
        description = options.description
    )
}

const MOD_TEST: &str = r#"import { assertEquals } from "jsr:@std/assert/equals";

Deno.test("Example", () => {
  assertEquals(1 + 1, 2);
});"#;

const PUBLISH_WORKFLOW: &str = r#"name: Publish

on:
  push:
    branches:
      - {branch}

jobs:
  publish:
    runs-on: ubuntu-latest
    permissions:
      contents: read
      id-token: write # The OIDC ID token is used for authentication with JSR.
    steps:
      - uses: actions/checkout@v4
      - name: Publish package
        run: npx jsr publish
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn options() -> ScaffoldOptions {
        ScaffoldOptions::new(
            ProjectName::parse("@acme/widgets").unwrap(),
            "Widgets for everyone",
        )
    }

    #[test]
    fn test_manifest_paths_in_order() {
        let files = build_file_manifest(&options()).unwrap();
        let paths: Vec<&str> = files.keys().map(String::as_str).collect();
        assert_eq!(
            paths,
            vec![
                "deno.json",
                "mod.ts",
                "mod_test.ts",
                "README.md",
                ".gitignore",
                ".vscode/settings.json",
                ".vscode/.gitignore",
                ".github/workflows/publish.yaml",
            ]
        );
    }

    #[test]
    fn test_deno_json_content() {
        let files = build_file_manifest(&options()).unwrap();
        let text = &files["deno.json"];
        assert!(text.starts_with("{\n  \"name\": \"@acme/widgets\",\n  \"version\": \"0.0.0\","));

        let value: Value = serde_json::from_str(text).unwrap();
        assert_eq!(value["license"], "ISC");
        assert_eq!(value["exports"], "./mod.ts");
        assert_eq!(value["exclude"][0], ".github/");
        assert_eq!(value["exclude"][1], ".gitignore");
    }

    #[test]
    fn test_interpolated_files() {
        let files = build_file_manifest(&options()).unwrap();
        assert_eq!(files["mod.ts"], "console.log(\"Hello from @acme/widgets!\");");
        assert!(files["README.md"].starts_with("# @acme/widgets\n\nWidgets for everyone\n"));
        assert_eq!(files[".gitignore"], ".env\n.DS_Store");
        assert_eq!(files[".vscode/.gitignore"], "*");
        assert!(files["mod_test.ts"].contains("assertEquals(1 + 1, 2);"));
    }

    #[test]
    fn test_editor_settings_compact() {
        let files = build_file_manifest(&options()).unwrap();
        assert_eq!(
            files[".vscode/settings.json"],
            r#"{"deno.enable":true,"typescript.tsserver.experimental.enableProjectDiagnostics":false}"#
        );
    }

    #[test]
    fn test_workflow_branch_and_license_overrides() {
        let mut opts = options();
        opts.branch = "trunk".to_string();
        opts.license = "MIT".to_string();
        let files = build_file_manifest(&opts).unwrap();

        let workflow = &files[".github/workflows/publish.yaml"];
        assert!(workflow.contains("branches:\n      - trunk\n"));
        assert!(workflow.contains("run: npx jsr publish"));

        let value: Value = serde_json::from_str(&files["deno.json"]).unwrap();
        assert_eq!(value["license"], "MIT");
    }
}
