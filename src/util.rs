/// Stack safety for deep recursion.
///
/// Parsing and evaluation are plain recursive descent, so deeply nested input
/// or deeply recursive user functions would otherwise overflow the host
/// stack. The helpers here grow the stack on demand.
pub mod stack;
