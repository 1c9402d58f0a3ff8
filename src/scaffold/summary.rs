use url::form_urlencoded;

use crate::domain::ProjectName;

/// GitHub "new repository" link prefilled with the package name and description.
pub fn github_new_url(name: &ProjectName, description: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("name", name.package())
        .append_pair("description", description)
        .finish();
    format!("https://github.com/new?{}", query)
}

pub fn jsr_new_url(name: &ProjectName) -> String {
    format!(
        "https://jsr.io/new?scope={}&package={}",
        name.scope_name(),
        name.package()
    )
}

pub fn jsr_settings_url(name: &ProjectName) -> String {
    format!("https://jsr.io/{}/settings", name)
}

/// Human-readable instructions printed once the project is on disk.
pub fn next_steps(name: &ProjectName, description: &str, folder: &str) -> String {
    let package = name.package();
    format!(
        "Next steps:

Create GitHub repository:
  1. {github}

Create JSR package:
  1. {jsr_new}
  2. Open settings ({jsr_settings})
  3. Add project description:

    {description}

  4. Connect to github project ({package})

Publish changes to github
  1. `cd {folder}`
  2. `git init`
  3. `git add .`
  4. `git commit -m \"Initial commit\"`
  5. Follow instructions in GitHub from the section
     \"...or push an existing repository from the command line\"
",
        github = github_new_url(name, description),
        jsr_new = jsr_new_url(name),
        jsr_settings = jsr_settings_url(name),
    )
}
