use std::path::PathBuf;

/// The configuration parameters for the application.
///
/// These can either be passed on the command line, or pulled from environment variables.
/// The latter is preferred as environment variables are one of the recommended ways to
/// get configuration from Kubernetes Secrets in deployment.
///
/// For development convenience, `main()` also loads a `.env` file in the working directory
/// via `dotenvy` before parsing; see `.env.sample` for the expected keys.
#[derive(clap::Parser, Debug, Default)]
pub struct Config {
    /// The connection URL for the Postgres database this application should use.
    #[clap(long, env)]
    pub database_url: String,

    /// The deployment mode. Only `dev` allows `POST /admin/reset`, which wipes every user.
    #[clap(long, env, default_value = "prod")]
    pub platform: String,

    #[clap(long, env, default_value_t = 8080)]
    pub port: u16,

    /// Directory served under `/app`.
    #[clap(long, env, default_value = ".")]
    pub filepath_root: PathBuf,
}

impl Config {
    pub fn is_dev(&self) -> bool {
        self.platform == "dev"
    }
}
