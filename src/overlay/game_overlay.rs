use crate::room::{parse_hex_color, RoomState};

const PANEL_WIDTH: f32 = 260.0;
const MARGIN: f32 = 10.0;
const CHAT_HEIGHT: f32 = 280.0;
const MAX_INPUT_LEN: usize = 200;

/// Couleur imgui à partir d'une couleur `#rrggbb`, gris si illisible.
pub fn imgui_color(hex: &str) -> [f32; 4] {
    parse_hex_color(hex).unwrap_or([0.8, 0.8, 0.8, 1.0])
}

/// Panneaux imgui au-dessus de la scène : joueurs, statistiques, chat.
#[derive(Debug)]
pub struct GameOverlay {
    input: String,
    auto_scroll: bool,
    seen_messages: usize,
    pub visible: bool,
}

impl Default for GameOverlay {
    fn default() -> Self {
        Self::new()
    }
}

impl GameOverlay {
    pub fn new() -> Self {
        Self {
            input: String::with_capacity(MAX_INPUT_LEN),
            auto_scroll: true,
            seen_messages: 0,
            visible: true,
        }
    }

    /// Dessine l'overlay. Retourne le texte à envoyer quand Entrée est validée.
    pub fn draw(&mut self, ui: &mut imgui::Ui, room: &RoomState) -> Option<String> {
        if !self.visible {
            return None;
        }

        let _window_bg = ui.push_style_color(imgui::StyleColor::WindowBg, [0.06, 0.09, 0.16, 0.7]);
        let _rounding = ui.push_style_var(imgui::StyleVar::WindowRounding(6.0));

        let [display_w, display_h] = ui.io().display_size;

        self.draw_players(ui, room);

        let mut submitted = None;
        ui.window("Chat")
            .size([PANEL_WIDTH, CHAT_HEIGHT], imgui::Condition::Always)
            .position(
                [
                    (display_w - PANEL_WIDTH - MARGIN).max(0.0),
                    (display_h - CHAT_HEIGHT - MARGIN).max(0.0),
                ],
                imgui::Condition::Always,
            )
            .movable(false)
            .resizable(false)
            .collapsible(false)
            .flags(imgui::WindowFlags::NO_TITLE_BAR | imgui::WindowFlags::NO_SCROLLBAR)
            .build(|| {
                let input_height = ui.frame_height_with_spacing();

                ui.child_window("chat_messages")
                    .size([0.0, -input_height])
                    .build(|| {
                        if room.chat().is_empty() {
                            ui.text_disabled("No messages yet");
                        }
                        for message in room.chat().iter() {
                            ui.text_colored(
                                imgui_color(&message.color),
                                format!("{}:", message.player_name),
                            );
                            ui.same_line();
                            ui.text_wrapped(&message.text);
                        }

                        let scroll_y = ui.scroll_y();
                        let scroll_max_y = ui.scroll_max_y();
                        if self.auto_scroll && scroll_y < scroll_max_y - 1.0 {
                            self.auto_scroll = false;
                        }
                        if !self.auto_scroll && (scroll_max_y - scroll_y) < 1.0 {
                            self.auto_scroll = true;
                        }
                        // nouveau message -> on recolle en bas
                        if room.chat().len() != self.seen_messages {
                            self.seen_messages = room.chat().len();
                            self.auto_scroll = true;
                        }
                        if self.auto_scroll {
                            ui.set_scroll_here_y();
                        }
                    });

                ui.set_next_item_width(-1.0);
                let entered = ui
                    .input_text("##chat_input", &mut self.input)
                    .hint("Type a message...")
                    .enter_returns_true(true)
                    .build();

                if entered {
                    submitted = self.take_input();
                    ui.set_keyboard_focus_here_with_offset(imgui::FocusedWidget::Previous);
                }
            });

        submitted
    }

    fn draw_players(&self, ui: &imgui::Ui, room: &RoomState) {
        ui.window("Players")
            .size([PANEL_WIDTH, 0.0], imgui::Condition::Always)
            .position([MARGIN, MARGIN], imgui::Condition::Always)
            .movable(false)
            .resizable(false)
            .collapsible(false)
            .flags(imgui::WindowFlags::NO_TITLE_BAR | imgui::WindowFlags::ALWAYS_AUTO_RESIZE)
            .build(|| {
                ui.text(format!("Players ({})", room.roster().len()));
                ui.separator();
                for player in room.roster().iter() {
                    let label = if player.is_current_user {
                        format!("{} (You)", player.name)
                    } else {
                        player.name.clone()
                    };
                    ui.text_colored(imgui_color(&player.color), label);
                }
                ui.separator();
                ui.text(format!("Fireworks: {}", room.stats.fireworks_launched));
                ui.text(format!("Explosions: {}", room.stats.explosions));
            });
    }

    /// Texte saisi, nettoyé et tronqué ; vide la zone de saisie.
    pub fn take_input(&mut self) -> Option<String> {
        let text: String = self.input.trim().chars().take(MAX_INPUT_LEN).collect();
        self.input.clear();
        (!text.is_empty()).then_some(text)
    }

    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_imgui_color_from_hex() {
        assert_eq!(imgui_color("#ff0000"), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(imgui_color("nope"), [0.8, 0.8, 0.8, 1.0]);
    }

    #[test]
    fn test_take_input_trims_and_clears() {
        let mut overlay = GameOverlay::new();
        overlay.set_input("  hello  ");
        assert_eq!(overlay.take_input().as_deref(), Some("hello"));
        assert_eq!(overlay.take_input(), None);

        overlay.set_input("   ");
        assert_eq!(overlay.take_input(), None);
    }

    #[test]
    fn test_take_input_is_bounded() {
        let mut overlay = GameOverlay::new();
        overlay.set_input(&"x".repeat(500));
        assert_eq!(overlay.take_input().map(|s| s.len()), Some(MAX_INPUT_LEN));
    }
}
