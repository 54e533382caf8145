pub trait ConfigProvider {
    /// Total buffer size in bytes, including the reserved terminator slot.
    fn buffer_capacity(&self) -> usize;
    fn label(&self) -> &str;
    fn idle_message(&self) -> &str;
}
