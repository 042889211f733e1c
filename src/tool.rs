use anyhow::{bail, Result};

/// A CLI subcommand tool over a captured argument vector.
///
/// Every tool resolves its vector in two phases: a help check, then the path
/// operation. [`dispatch`] guarantees exactly one of the two handlers runs
/// per invocation, with help taking precedence.
pub trait Tool {
    /// The raw invocation tokens, fixed for the lifetime of the instance.
    fn args(&self) -> &[String];

    /// Produce the tool's usage text. Returns true if help was produced.
    fn handle_help(&self) -> bool;

    /// Perform the tool's operation on `path`. Returns true on success;
    /// operational failures come back as false, never as an error.
    fn handle_path(&self, recursive: bool, path: &str) -> bool;
}

/// What an argument vector resolved to.
#[derive(Debug, PartialEq, Eq)]
pub enum Invocation {
    Help,
    Path { recursive: bool, path: String },
}

/// Resolves a raw argument vector. A help flag anywhere wins; otherwise the
/// first non-flag token is the path. Unknown flags, extra operands, and a
/// missing path are rejected before either handler is reached.
pub fn parse_invocation(args: &[String]) -> Result<Invocation> {
    if args.iter().any(|arg| arg == "-h" || arg == "--help") {
        return Ok(Invocation::Help);
    }

    let mut recursive = false;
    let mut path: Option<&str> = None;

    for arg in args {
        match arg.as_str() {
            "-R" | "--recursive" => recursive = true,
            flag if flag.starts_with('-') => bail!("unknown flag '{}'", flag),
            token => {
                if path.is_some() {
                    bail!("unexpected extra operand '{}'", token);
                }
                path = Some(token);
            }
        }
    }

    match path {
        Some(path) => Ok(Invocation::Path {
            recursive,
            path: path.to_string(),
        }),
        None => bail!("missing path operand"),
    }
}

/// Runs one dispatch: resolve the tool's argument vector and invoke exactly
/// one of its handlers. The returned bool is the operation's success signal;
/// the caller maps false to a non-zero exit status.
pub fn dispatch(tool: &dyn Tool) -> Result<bool> {
    match parse_invocation(tool.args())? {
        Invocation::Help => Ok(tool.handle_help()),
        Invocation::Path { recursive, path } => Ok(tool.handle_path(recursive, &path)),
    }
}
