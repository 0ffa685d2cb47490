// src/ui/accents.rs
use egui::text::{CCursor, CCursorRange};
use egui::text_edit::TextEditState;
use egui::{Context, Id};

/// Teclas del panel de tildes, en el orden en que se pintan.
pub const ACCENT_CHARS: [char; 12] = [
    'á', 'é', 'í', 'ó', 'ú', 'ñ', 'Á', 'É', 'Í', 'Ó', 'Ú', 'Ñ',
];

/// Inserta `ch` donde esté el cursor del campo `field_id` y le devuelve
/// el foco. Sin estado de cursor guardado, añade al final.
pub fn insertar_en_cursor(ctx: &Context, field_id: Id, text: &mut String, ch: char) {
    let mut state = TextEditState::load(ctx, field_id).unwrap_or_default();

    let total = text.chars().count();
    let char_pos = state
        .cursor
        .char_range()
        .map(|range| range.primary.index.min(total))
        .unwrap_or(total);

    text.insert(byte_index(text, char_pos), ch);

    // Cursor justo después del carácter insertado.
    state
        .cursor
        .set_char_range(Some(CCursorRange::one(CCursor::new(char_pos + 1))));
    state.store(ctx, field_id);
    ctx.memory_mut(|mem| mem.request_focus(field_id));
}

// El cursor de egui cuenta caracteres; `String::insert` pide bytes.
fn byte_index(text: &str, char_pos: usize) -> usize {
    text.char_indices()
        .nth(char_pos)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}
