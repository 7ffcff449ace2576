pub mod chart;
pub mod projection;
pub mod state;

/// Centralized logging system for the entire application
pub mod logging {
    use derive_more::Display;

    /// Log levels with automatic Display implementation
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display)]
    pub enum LogLevel {
        #[display(fmt = "TRACE")]
        Trace = 0,
        #[display(fmt = "DEBUG")]
        Debug = 1,
        #[display(fmt = " INFO")]
        Info = 2,
        #[display(fmt = " WARN")]
        Warn = 3,
        #[display(fmt = "ERROR")]
        Error = 4,
    }

    /// Log components with automatic Display implementation
    #[derive(Debug, Clone, Display)]
    pub enum LogComponent {
        #[display(fmt = "DOM:{}", _0)]
        Domain(&'static str),
        #[display(fmt = "APP:{}", _0)]
        Application(&'static str),
        #[display(fmt = "INF:{}", _0)]
        Infrastructure(&'static str),
        #[display(fmt = "PRE:{}", _0)]
        Presentation(&'static str),
    }

    /// Structured log entry
    #[derive(Debug, Clone)]
    pub struct LogEntry {
        pub timestamp: u64,
        pub level: LogLevel,
        pub component: LogComponent,
        pub message: String,
        pub metadata: Option<String>,
    }

    /// Domain abstraction for time service
    pub trait TimeProvider: Send + Sync {
        fn current_timestamp(&self) -> u64;
        fn format_timestamp(&self, timestamp: u64) -> String;
    }

    /// Domain abstraction for structured logging
    pub trait Logger: Send + Sync {
        fn log(&self, entry: LogEntry);

        fn trace(&self, component: LogComponent, message: &str) {
            self.log(LogEntry::new(LogLevel::Trace, component, message));
        }

        fn debug(&self, component: LogComponent, message: &str) {
            self.log(LogEntry::new(LogLevel::Debug, component, message));
        }

        fn info(&self, component: LogComponent, message: &str) {
            self.log(LogEntry::new(LogLevel::Info, component, message));
        }

        fn warn(&self, component: LogComponent, message: &str) {
            self.log(LogEntry::new(LogLevel::Warn, component, message));
        }

        fn error(&self, component: LogComponent, message: &str) {
            self.log(LogEntry::new(LogLevel::Error, component, message));
        }

        /// Log with structured metadata
        fn log_with_metadata(&self, level: LogLevel, component: LogComponent, message: &str, metadata: &str) {
            self.log(LogEntry::new_with_metadata(level, component, message, metadata));
        }
    }

    impl LogEntry {
        pub fn new(level: LogLevel, component: LogComponent, message: &str) -> Self {
            Self {
                timestamp: get_time_provider().current_timestamp(),
                level,
                component,
                message: message.to_string(),
                metadata: None,
            }
        }

        pub fn new_with_metadata(level: LogLevel, component: LogComponent, message: &str, metadata: &str) -> Self {
            Self {
                timestamp: get_time_provider().current_timestamp(),
                level,
                component,
                message: message.to_string(),
                metadata: Some(metadata.to_string()),
            }
        }
    }

    /// Global services using thread-safe statics
    use std::sync::OnceLock;
    static GLOBAL_LOGGER: OnceLock<Box<dyn Logger + Sync + Send>> = OnceLock::new();
    static GLOBAL_TIME_PROVIDER: OnceLock<Box<dyn TimeProvider + Sync + Send>> = OnceLock::new();

    /// Initialize global logger
    pub fn init_logger(logger: Box<dyn Logger + Sync + Send>) {
        let _ = GLOBAL_LOGGER.set(logger);
    }

    /// Initialize global time provider
    pub fn init_time_provider(time_provider: Box<dyn TimeProvider + Sync + Send>) {
        let _ = GLOBAL_TIME_PROVIDER.set(time_provider);
    }

    /// Get global logger reference
    pub fn get_logger() -> &'static dyn Logger {
        GLOBAL_LOGGER.get().map(|logger| logger.as_ref()).unwrap_or(&NoOpLogger)
    }

    /// Get global time provider reference
    pub fn get_time_provider() -> &'static dyn TimeProvider {
        GLOBAL_TIME_PROVIDER.get().map(|provider| provider.as_ref()).unwrap_or(&BasicTimeProvider)
    }

    /// No-op logger fallback
    struct NoOpLogger;
    impl Logger for NoOpLogger {
        fn log(&self, _entry: LogEntry) {}
    }

    /// Basic time provider fallback (monotonic counter, native-safe)
    struct BasicTimeProvider;
    impl TimeProvider for BasicTimeProvider {
        fn current_timestamp(&self) -> u64 {
            use std::sync::atomic::{AtomicU64, Ordering};
            static COUNTER: AtomicU64 = AtomicU64::new(0);
            COUNTER.fetch_add(1, Ordering::SeqCst)
        }

        fn format_timestamp(&self, timestamp: u64) -> String {
            format!("{:06}", timestamp)
        }
    }

    /// Simplified logging macros
    #[macro_export]
    macro_rules! log_trace {
        ($component:expr, $($arg:tt)*) => {
            #[cfg(debug_assertions)]
            {
                $crate::domain::logging::get_logger().trace($component, &format!($($arg)*));
            }
        };
    }

    #[macro_export]
    macro_rules! log_debug {
        ($component:expr, $($arg:tt)*) => {
            #[cfg(debug_assertions)]
            {
                $crate::domain::logging::get_logger().debug($component, &format!($($arg)*));
            }
        };
    }

    #[macro_export]
    macro_rules! log_info {
        ($component:expr, $($arg:tt)*) => {
            $crate::domain::logging::get_logger().info($component, &format!($($arg)*));
        };
    }

    #[macro_export]
    macro_rules! log_warn {
        ($component:expr, $($arg:tt)*) => {
            $crate::domain::logging::get_logger().warn($component, &format!($($arg)*));
        };
    }

    #[macro_export]
    macro_rules! log_error {
        ($component:expr, $($arg:tt)*) => {
            $crate::domain::logging::get_logger().error($component, &format!($($arg)*));
        };
    }
}

/// Centralized error handling for the entire application
pub mod errors {
    use std::fmt::{Display, Formatter, Result as FmtResult};

    /// Root error type for the entire application
    #[derive(Debug, Clone)]
    pub enum AppError {
        Domain(DomainError),
        Application(ApplicationError),
        Infrastructure(InfrastructureError),
        Presentation(PresentationError),
    }

    /// Domain layer specific errors
    #[derive(Debug, Clone)]
    pub enum DomainError {
        Validation(ValidationError),
    }

    /// Validation errors from domain value objects and services
    #[derive(Debug, Clone)]
    pub enum ValidationError {
        InvalidPeriodCount(String),
        InvalidBaseScale(String),
        UnknownDataset(String),
        UnknownCategory(String),
    }

    /// Application layer errors
    #[derive(Debug, Clone)]
    pub enum ApplicationError {
        Configuration(ConfigurationError),
    }

    /// Configuration errors
    #[derive(Debug, Clone)]
    pub enum ConfigurationError {
        UnknownVariant(String),
        InvalidParameter(String),
    }

    /// Infrastructure layer errors
    #[derive(Debug, Clone)]
    pub enum InfrastructureError {
        Rendering(RenderingError),
    }

    /// Rendering engine errors
    #[derive(Debug, Clone)]
    pub enum RenderingError {
        CanvasNotFound(String),
        ContextUnavailable(String),
        DrawFailed(String),
    }

    /// Presentation layer errors
    #[derive(Debug, Clone)]
    pub enum PresentationError {
        Ui(UiError),
    }

    /// User interface errors
    #[derive(Debug, Clone)]
    pub enum UiError {
        ElementNotFound(String),
        InvalidDimensions(String),
    }

    impl Display for AppError {
        fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
            match self {
                AppError::Domain(e) => write!(f, "Domain Error: {}", e),
                AppError::Application(e) => write!(f, "Application Error: {}", e),
                AppError::Infrastructure(e) => write!(f, "Infrastructure Error: {}", e),
                AppError::Presentation(e) => write!(f, "Presentation Error: {}", e),
            }
        }
    }

    impl Display for DomainError {
        fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
            match self {
                DomainError::Validation(e) => write!(f, "Validation: {}", e),
            }
        }
    }

    impl Display for ValidationError {
        fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
            match self {
                ValidationError::InvalidPeriodCount(msg) => write!(f, "Invalid period count: {}", msg),
                ValidationError::InvalidBaseScale(msg) => write!(f, "Invalid base scale: {}", msg),
                ValidationError::UnknownDataset(msg) => write!(f, "Unknown dataset: {}", msg),
                ValidationError::UnknownCategory(msg) => write!(f, "Unknown category: {}", msg),
            }
        }
    }

    impl Display for ApplicationError {
        fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
            match self {
                ApplicationError::Configuration(e) => write!(f, "Configuration: {}", e),
            }
        }
    }

    impl Display for ConfigurationError {
        fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
            match self {
                ConfigurationError::UnknownVariant(name) => write!(f, "unknown variant '{}'", name),
                ConfigurationError::InvalidParameter(msg) => write!(f, "invalid parameter: {}", msg),
            }
        }
    }

    impl Display for InfrastructureError {
        fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
            match self {
                InfrastructureError::Rendering(e) => write!(f, "Rendering: {}", e),
            }
        }
    }

    impl Display for RenderingError {
        fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
            match self {
                RenderingError::CanvasNotFound(id) => write!(f, "canvas '{}' not found", id),
                RenderingError::ContextUnavailable(msg) => write!(f, "2d context unavailable: {}", msg),
                RenderingError::DrawFailed(msg) => write!(f, "draw failed: {}", msg),
            }
        }
    }

    impl Display for PresentationError {
        fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
            match self {
                PresentationError::Ui(e) => write!(f, "UI: {}", e),
            }
        }
    }

    impl Display for UiError {
        fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
            match self {
                UiError::ElementNotFound(id) => write!(f, "element '{}' not found", id),
                UiError::InvalidDimensions(msg) => write!(f, "invalid dimensions: {}", msg),
            }
        }
    }

    impl From<ValidationError> for DomainError {
        fn from(error: ValidationError) -> Self {
            DomainError::Validation(error)
        }
    }

    impl From<DomainError> for AppError {
        fn from(error: DomainError) -> Self {
            AppError::Domain(error)
        }
    }

    impl From<ValidationError> for AppError {
        fn from(error: ValidationError) -> Self {
            AppError::Domain(DomainError::Validation(error))
        }
    }

    impl From<ApplicationError> for AppError {
        fn from(error: ApplicationError) -> Self {
            AppError::Application(error)
        }
    }

    impl From<ConfigurationError> for AppError {
        fn from(error: ConfigurationError) -> Self {
            AppError::Application(ApplicationError::Configuration(error))
        }
    }

    impl From<RenderingError> for InfrastructureError {
        fn from(error: RenderingError) -> Self {
            InfrastructureError::Rendering(error)
        }
    }

    impl From<InfrastructureError> for AppError {
        fn from(error: InfrastructureError) -> Self {
            AppError::Infrastructure(error)
        }
    }

    impl From<PresentationError> for AppError {
        fn from(error: PresentationError) -> Self {
            AppError::Presentation(error)
        }
    }
}

/// Domain Events infrastructure
pub mod events {
    use crate::domain::projection::AdjustmentId;
    use std::fmt::Debug;

    /// Base trait for all domain events
    pub trait DomainEvent: Debug + Clone {
        fn event_type(&self) -> &'static str;
        fn timestamp(&self) -> u64 {
            super::logging::get_time_provider().current_timestamp()
        }
    }

    /// Events raised by user interactions with the simulation
    #[derive(Debug, Clone)]
    pub enum SimulationEvent {
        AdjustmentToggled { id: AdjustmentId, now_active: bool },
        SelectionReset,
        PeriodCountChanged { old: u32, new: u32 },
        BaseScaleChanged { old: f64, new: f64 },
        DatasetSelected { id: String },
        CategoryToggled { id: String, included: bool },
    }

    impl DomainEvent for SimulationEvent {
        fn event_type(&self) -> &'static str {
            match self {
                SimulationEvent::AdjustmentToggled { .. } => "AdjustmentToggled",
                SimulationEvent::SelectionReset => "SelectionReset",
                SimulationEvent::PeriodCountChanged { .. } => "PeriodCountChanged",
                SimulationEvent::BaseScaleChanged { .. } => "BaseScaleChanged",
                SimulationEvent::DatasetSelected { .. } => "DatasetSelected",
                SimulationEvent::CategoryToggled { .. } => "CategoryToggled",
            }
        }
    }

    /// Events related to chart recomputation
    #[derive(Debug, Clone)]
    pub enum ChartEvent {
        SeriesRecomputed { series_count: usize, point_count: usize, total_adjustment: f64 },
        ViewportChanged { old_max: f64, new_max: f64 },
    }

    impl DomainEvent for ChartEvent {
        fn event_type(&self) -> &'static str {
            match self {
                ChartEvent::SeriesRecomputed { .. } => "SeriesRecomputed",
                ChartEvent::ViewportChanged { .. } => "ViewportChanged",
            }
        }
    }

    /// Event dispatcher for publishing events
    pub trait EventDispatcher {
        fn publish_simulation_event(&self, event: SimulationEvent);
        fn publish_chart_event(&self, event: ChartEvent);
    }

    /// Simple in-memory event dispatcher
    #[derive(Default)]
    pub struct InMemoryEventDispatcher {
        simulation_handlers: Vec<Box<dyn Fn(&SimulationEvent)>>,
        chart_handlers: Vec<Box<dyn Fn(&ChartEvent)>>,
    }

    impl InMemoryEventDispatcher {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn subscribe_to_simulation_events<F>(&mut self, handler: F)
        where
            F: Fn(&SimulationEvent) + 'static,
        {
            self.simulation_handlers.push(Box::new(handler));
        }

        pub fn subscribe_to_chart_events<F>(&mut self, handler: F)
        where
            F: Fn(&ChartEvent) + 'static,
        {
            self.chart_handlers.push(Box::new(handler));
        }
    }

    impl EventDispatcher for InMemoryEventDispatcher {
        fn publish_simulation_event(&self, event: SimulationEvent) {
            for handler in &self.simulation_handlers {
                handler(&event);
            }
        }

        fn publish_chart_event(&self, event: ChartEvent) {
            for handler in &self.chart_handlers {
                handler(&event);
            }
        }
    }
}
