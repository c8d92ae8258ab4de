//! Label catalog
//!
//! All user-facing strings live here so the UI can switch between English
//! and Spanish at runtime. Messages that embed a value use a `{}` slot the
//! caller fills with `str::replace`.

use serde::{Deserialize, Serialize};

/// Available UI languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    Spanish,
}

/// Translatable label keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum T {
    // Menu bar
    File,
    New,
    Open,
    Save,
    SaveAs,
    CloseDocument,
    Exit,
    View,
    Help,
    About,
    Autosave,
    History,
    Notifications,
    PanelPlacement,
    PlacementSidebar,
    PlacementBottom,

    // Status bar / document state
    Ready,
    NoDocument,
    UntitledDocument,
    UnsavedChanges,
    AllChangesSaved,
    NeverSaved,
    DocumentSavedTo,
    DocumentLoaded,
    DocumentClosed,
    SaveFailed,
    OpenFailed,

    // Autosave panel
    EnableAutosave,
    AutosaveInterval,
    SaveUnsavedFiles,
    TempSavePath,
    PickFolder,
    FallbackTarget,
    CopyFallbackPath,
    CopiedToClipboard,
    RestartTimer,
    TimerStateArmed,
    TimerStateDisarmed,
    TimerRestarted,
    TimerStopped,

    // History panel
    TimeColumn,
    EventColumn,
    PathColumn,
    DetailColumn,
    NoEventsYet,
    ClearAll,
    ExportCSV,
    ExportJSON,
    HistoryExported,
    ExportFailed,

    // Autosave event kinds
    EventSavedExisting,
    EventSavedFallback,
    EventSkippedDirty,
    EventSkippedUnsaved,
    EventFailed,

    // Notifications
    NoNotifications,

    // About dialog
    AboutTitle,
    AboutVersion,
    Close,
}

/// Look up a label in the given language
pub fn t(key: T, lang: Language) -> &'static str {
    match lang {
        Language::English => english(key),
        Language::Spanish => spanish(key),
    }
}

fn english(key: T) -> &'static str {
    match key {
        T::File => "File",
        T::New => "New",
        T::Open => "Open…",
        T::Save => "Save",
        T::SaveAs => "Save As…",
        T::CloseDocument => "Close Document",
        T::Exit => "Exit",
        T::View => "View",
        T::Help => "Help",
        T::About => "About",
        T::Autosave => "Autosave",
        T::History => "Autosave History",
        T::Notifications => "Notifications",
        T::PanelPlacement => "Autosave panel placement",
        T::PlacementSidebar => "Right sidebar",
        T::PlacementBottom => "Bottom panel",

        T::Ready => "Ready",
        T::NoDocument => "No document open",
        T::UntitledDocument => "Untitled",
        T::UnsavedChanges => "Unsaved changes",
        T::AllChangesSaved => "All changes saved",
        T::NeverSaved => "Never saved",
        T::DocumentSavedTo => "Document saved to {}",
        T::DocumentLoaded => "Opened {}",
        T::DocumentClosed => "Document closed",
        T::SaveFailed => "Save failed: {}",
        T::OpenFailed => "Could not open file: {}",

        T::EnableAutosave => "Enable autosave",
        T::AutosaveInterval => "Interval (seconds)",
        T::SaveUnsavedFiles => "Save never-saved documents",
        T::TempSavePath => "Fallback folder",
        T::PickFolder => "Pick…",
        T::FallbackTarget => "Fallback file",
        T::CopyFallbackPath => "Copy path",
        T::CopiedToClipboard => "Copied to clipboard",
        T::RestartTimer => "Restart autosave timer",
        T::TimerStateArmed => "Armed",
        T::TimerStateDisarmed => "Disarmed",
        T::TimerRestarted => "Autosave timer restarted with interval {} seconds",
        T::TimerStopped => "Autosave timer stopped (autosave is disabled)",

        T::TimeColumn => "Time",
        T::EventColumn => "Event",
        T::PathColumn => "Path",
        T::DetailColumn => "Detail",
        T::NoEventsYet => "No autosave activity yet",
        T::ClearAll => "Clear All",
        T::ExportCSV => "Export CSV",
        T::ExportJSON => "Export JSON",
        T::HistoryExported => "History exported to {}",
        T::ExportFailed => "Export failed: {}",

        T::EventSavedExisting => "Saved",
        T::EventSavedFallback => "Fallback save",
        T::EventSkippedDirty => "Skipped (unsaved edits)",
        T::EventSkippedUnsaved => "Skipped (never saved)",
        T::EventFailed => "Failed",

        T::NoNotifications => "No notifications",

        T::AboutTitle => "About Inkpad",
        T::AboutVersion => "Version 0.1.0",
        T::Close => "Close",
    }
}

fn spanish(key: T) -> &'static str {
    match key {
        T::File => "Archivo",
        T::New => "Nuevo",
        T::Open => "Abrir…",
        T::Save => "Guardar",
        T::SaveAs => "Guardar como…",
        T::CloseDocument => "Cerrar documento",
        T::Exit => "Salir",
        T::View => "Ver",
        T::Help => "Ayuda",
        T::About => "Acerca de",
        T::Autosave => "Autoguardado",
        T::History => "Historial de autoguardado",
        T::Notifications => "Notificaciones",
        T::PanelPlacement => "Ubicación del panel de autoguardado",
        T::PlacementSidebar => "Barra lateral derecha",
        T::PlacementBottom => "Panel inferior",

        T::Ready => "Listo",
        T::NoDocument => "Ningún documento abierto",
        T::UntitledDocument => "Sin título",
        T::UnsavedChanges => "Cambios sin guardar",
        T::AllChangesSaved => "Todos los cambios guardados",
        T::NeverSaved => "Nunca guardado",
        T::DocumentSavedTo => "Documento guardado en {}",
        T::DocumentLoaded => "Abierto {}",
        T::DocumentClosed => "Documento cerrado",
        T::SaveFailed => "Error al guardar: {}",
        T::OpenFailed => "No se pudo abrir el archivo: {}",

        T::EnableAutosave => "Activar autoguardado",
        T::AutosaveInterval => "Intervalo (segundos)",
        T::SaveUnsavedFiles => "Guardar documentos nunca guardados",
        T::TempSavePath => "Carpeta de respaldo",
        T::PickFolder => "Elegir…",
        T::FallbackTarget => "Archivo de respaldo",
        T::CopyFallbackPath => "Copiar ruta",
        T::CopiedToClipboard => "Copiado al portapapeles",
        T::RestartTimer => "Reiniciar temporizador de autoguardado",
        T::TimerStateArmed => "Activo",
        T::TimerStateDisarmed => "Inactivo",
        T::TimerRestarted => "Temporizador reiniciado con intervalo de {} segundos",
        T::TimerStopped => "Temporizador detenido (el autoguardado está desactivado)",

        T::TimeColumn => "Hora",
        T::EventColumn => "Evento",
        T::PathColumn => "Ruta",
        T::DetailColumn => "Detalle",
        T::NoEventsYet => "Sin actividad de autoguardado",
        T::ClearAll => "Limpiar todo",
        T::ExportCSV => "Exportar CSV",
        T::ExportJSON => "Exportar JSON",
        T::HistoryExported => "Historial exportado a {}",
        T::ExportFailed => "Error al exportar: {}",

        T::EventSavedExisting => "Guardado",
        T::EventSavedFallback => "Guardado de respaldo",
        T::EventSkippedDirty => "Omitido (cambios sin guardar)",
        T::EventSkippedUnsaved => "Omitido (nunca guardado)",
        T::EventFailed => "Error",

        T::NoNotifications => "Sin notificaciones",

        T::AboutTitle => "Acerca de Inkpad",
        T::AboutVersion => "Versión 0.1.0",
        T::Close => "Cerrar",
    }
}
