use crate::model::PeriodKind;

/// Mise en forme d'une ligne, indépendante de la bibliothèque de rendu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowStyle {
    /// Couleur de fond ARGB.
    pub fill_argb: &'static str,
    pub bold: bool,
    pub border: bool,
}

pub const HEADER_STYLE: RowStyle = RowStyle {
    fill_argb: "FFDDEBF7",
    bold: true,
    border: true,
};

pub fn row_style(kind: PeriodKind) -> RowStyle {
    let fill_argb = match kind {
        PeriodKind::ClassTeacher => "FFC9DAF8",
        PeriodKind::Leisure => "FFF2F2F2",
        PeriodKind::Normal => "FFFFFFFF",
    };
    RowStyle {
        fill_argb,
        bold: false,
        border: false,
    }
}
