use std::fmt;

/// Suffix appended to a variant name to get the compiled module name.
pub const COMPILED_SUFFIX: &str = ".spv";

/// Chains the printed lines into a single shell command.
pub const CONTINUATION: &str = " && \\";

/// A shell invocation compiling one variant to SPIR-V. Only ever printed.
#[derive(Debug, Clone, Copy)]
pub struct CompileCommand<'a> {
    pub compiler: &'a str,
    pub input: &'a str,
}

impl<'a> CompileCommand<'a> {
    pub fn new(compiler: &'a str, input: &'a str) -> Self {
        CompileCommand { compiler, input }
    }
}

impl fmt::Display for CompileCommand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{compiler} --target-env=vulkan1.2 {input} -std=450core -O -o {input}{COMPILED_SUFFIX}{CONTINUATION}",
            compiler = self.compiler,
            input = self.input,
        )
    }
}
