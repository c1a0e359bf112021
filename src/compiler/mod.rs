//! 编译模块：将规则库校验并编译为可执行的正则模式
pub mod pattern;
pub mod compiler;

pub use self::pattern::{CompiledPattern, CompiledCategory, CompiledCatalog};
pub use self::compiler::CatalogCompiler;
