// stage.rs — `goc-stage stage`.

use goc_workspace::{stage, BuildContext, ExcludePatterns, GoEnv};

pub fn execute(buildflags: &str, json: bool) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let (config, lister) = super::load_config(&cwd)?;

    let mut ctx = BuildContext::new(&cwd, config.temp_base()?, buildflags);
    let excludes = ExcludePatterns::new(config.staging.exclude.iter().cloned());
    let staged = stage(&mut ctx, &lister, &GoEnv::from_process(), &excludes)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&staged)?);
    } else {
        println!("Temp workspace:    {}", staged.temp_root.display());
        println!("Working directory: {}", staged.temp_working_dir.display());
        println!("GOPATH:            {}", staged.effective_gopath);
    }
    Ok(())
}
