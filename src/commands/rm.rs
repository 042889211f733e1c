use crate::client::FsClient;
use crate::tool::{self, Tool};
use anyhow::Result;
use log::info;

const USAGE: &str = "\
Usage: dfs rm [-h] [-R] <path>

Remove the given path from the filesystem.

Options:
  -R, --recursive  remove a directory and its contents recursively
  -h, --help       print this help text";

/// The rm subcommand: exclusively owns its argument vector for one invocation
/// and delegates the actual removal to the filesystem client.
pub struct RmTool<'a> {
    args: Vec<String>,
    client: &'a dyn FsClient,
}

impl<'a> RmTool<'a> {
    pub fn new(args: Vec<String>, client: &'a dyn FsClient) -> Self {
        RmTool { args, client }
    }
}

impl Tool for RmTool<'_> {
    fn args(&self) -> &[String] {
        &self.args
    }

    fn handle_help(&self) -> bool {
        println!("{}", USAGE);
        true
    }

    fn handle_path(&self, recursive: bool, path: &str) -> bool {
        let removed = self.client.remove(path, recursive);
        if removed {
            info!("Removed '{}'", path);
        }
        removed
    }
}

pub fn cmd_rm(client: &dyn FsClient, args: &[String]) -> Result<()> {
    let tool = RmTool::new(args.to_vec(), client);
    if tool::dispatch(&tool)? {
        Ok(())
    } else {
        anyhow::bail!("rm: failed to remove path")
    }
}
