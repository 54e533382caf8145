use crate::domain::model::Invocation;
use clap::Parser;
use std::ffi::OsString;

/// Command line of the native service.
///
/// Every token is user input, so no flags are defined and the built-in help
/// and version flags are switched off.
#[derive(Debug, Clone, Parser)]
#[command(name = "native_service")]
#[command(about = "Minidroid native service")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct CliArgs {
    /// Input to process. Only the first value is used.
    #[arg(
        value_name = "INPUT",
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub inputs: Vec<OsString>,
}

impl CliArgs {
    /// Parses a full argument list, binary name first.
    ///
    /// An escape is placed after the binary name so clap never interprets a
    /// user token, a literal `--` included.
    pub fn parse_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::parse_from(escape_inputs(args))
    }

    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(escape_inputs(args))
    }

    pub fn invocation(&self) -> Invocation {
        match self.inputs.first() {
            Some(input) => Invocation::Process(input.as_encoded_bytes().to_vec()),
            None => Invocation::Idle,
        }
    }
}

fn escape_inputs<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut escaped: Vec<OsString> = args.next().into_iter().collect();
    escaped.push(OsString::from("--"));
    escaped.extend(args);
    escaped
}
