/// Configuration for the external compiler invocation.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Compiler executable, looked up on `PATH` unless absolute.
    pub javac: String,
    /// Extra options passed before the classpath and source file.
    pub compiler_options: Vec<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            javac: "javac".to_string(),
            compiler_options: vec![],
        }
    }
}
