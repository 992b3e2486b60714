/// Identification of a multi-step admin workflow
pub trait UseCaseMetadata {
    /// Index, e.g. `"u501"`
    fn usecase_index() -> &'static str;

    /// Technical name, e.g. `"service_import"`
    fn usecase_name() -> &'static str;

    /// Title shown in the UI
    fn display_name() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// `"<index>_<name>"`
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
