use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use super::app::{ConfirmAction, CreatorFocus, InteractiveApp, Screen};
use super::layout::{app_layout, centered_popup};
use super::notifications;
use crate::constants::{MAX_QUESTIONS, MAX_SCORE};
use crate::formatting::{date_only, score_label, submission_summary, truncate};
use crate::models::Visibility;

pub fn draw(frame: &mut Frame, app: &InteractiveApp) {
    let layout = app_layout(frame.size(), app.notifications.len());

    draw_header(frame, layout.header, app);

    match app.screen {
        Screen::Welcome => draw_welcome(frame, layout.main, app),
        Screen::SignIn | Screen::SignUp => draw_form(frame, layout.main, app),
        Screen::Surveys => draw_surveys(frame, layout.main, app),
        Screen::Creator => draw_creator(frame, layout.main, app),
        Screen::Detail => draw_detail(frame, layout.main, app),
        Screen::Participate => draw_participate(frame, layout.main, app),
        Screen::Filler => draw_filler(frame, layout.main, app),
    }

    notifications::draw(frame, layout.notifications, app);
    draw_footer(frame, layout.footer, app);

    if let Some(action) = app.popup {
        draw_confirm_popup(frame, frame.size(), action);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(30)])
        .split(area);

    let title = match app.screen {
        Screen::Welcome => " SurveyMe ".to_string(),
        Screen::SignIn => " Sign In ".to_string(),
        Screen::SignUp => " Sign Up ".to_string(),
        Screen::Surveys => " My Surveys ".to_string(),
        Screen::Creator => " New Survey ".to_string(),
        Screen::Detail => match app.detail_survey() {
            Some(survey) => format!(
                " {} ",
                truncate(
                    &survey.title,
                    (header_chunks[0].width as usize).saturating_sub(4)
                )
            ),
            None => " Survey ".to_string(),
        },
        Screen::Participate => " Participate ".to_string(),
        Screen::Filler => match &app.filler {
            Some(filler) => format!(
                " {} ",
                truncate(
                    &filler.survey.title,
                    (header_chunks[0].width as usize).saturating_sub(4)
                )
            ),
            None => " Participate ".to_string(),
        },
    };

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .bg(Color::Black)
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(header, header_chunks[0]);

    let info = match &app.account {
        Some(account) => format!(" {} ", account.username),
        None => " Not signed in ".to_string(),
    };
    let info_widget = Paragraph::new(info)
        .style(Style::default().bg(Color::Black).fg(Color::Yellow))
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(info_widget, header_chunks[1]);
}

fn draw_welcome(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let block = Block::default().borders(Borders::ALL).title(" Welcome ");

    let items: Vec<ListItem> = app
        .menu_items()
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let selected = i == app.menu_index;
            let style = if selected {
                Style::default()
                    .bg(Color::DarkGray)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(format!("  {}  ", item)).style(style)
        })
        .collect();

    let inner_area = centered_popup(40, app.menu_items().len() as u16 + 4, area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(
            "Create surveys, share codes, collect answers.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];
    let intro_area = Rect::new(
        inner_area.x,
        inner_area.y.saturating_sub(3),
        inner_area.width,
        2,
    );
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), intro_area);

    let list = List::new(items);
    frame.render_widget(list, inner_area);
}

fn form_fields(app: &InteractiveApp) -> Vec<(&'static str, String, bool)> {
    let masked = "•".repeat(app.password_input.chars().count());
    match app.screen {
        Screen::SignUp => vec![
            ("Email", app.email_input.clone(), app.form_focus == 0),
            ("Username", app.username_input.clone(), app.form_focus == 1),
            ("Password", masked, app.form_focus == 2),
        ],
        _ => vec![
            ("Email", app.email_input.clone(), app.form_focus == 0),
            ("Password", masked, app.form_focus == 1),
        ],
    }
}

fn draw_form(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let fields = form_fields(app);
    let mut constraints: Vec<Constraint> = fields.iter().map(|_| Constraint::Length(3)).collect();
    constraints.push(Constraint::Min(0));

    let form_area = centered_popup(50, fields.len() as u16 * 3 + 2, area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(form_area);

    for (i, (label, value, focused)) in fields.iter().enumerate() {
        let border_style = if *focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let text = if *focused {
            format!("{}_", value)
        } else {
            value.clone()
        };
        let field = Paragraph::new(text).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", label))
                .border_style(border_style),
        );
        frame.render_widget(field, chunks[i]);
    }
}

fn draw_surveys(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let block = Block::default().borders(Borders::ALL).title(" Surveys ");

    if app.is_loading() && app.surveys.is_empty() {
        let loading = Paragraph::new("Loading surveys...")
            .style(Style::default().fg(Color::Yellow))
            .block(block)
            .alignment(Alignment::Center);
        frame.render_widget(loading, area);
        return;
    }

    if app.surveys.is_empty() {
        let empty = Paragraph::new("No surveys yet. Press 'n' to create one.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block)
            .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    }

    let inner_width = area.width.saturating_sub(2) as usize;
    let title_width = inner_width.saturating_sub(30).max(15);

    let header_style = Style::default()
        .fg(Color::Gray)
        .add_modifier(Modifier::UNDERLINED);
    let header = format!(
        "  {:<title_width$} {:<10} {:>4} {:<12}",
        "Title", "Status", "Qs", "Created"
    );
    let header_item = ListItem::new(header).style(header_style);

    let items: Vec<ListItem> = std::iter::once(header_item)
        .chain(app.surveys.iter().enumerate().map(|(i, survey)| {
            let selected = i == app.selected_survey;
            let status = if survey.published {
                Span::styled(
                    format!("{:<10}", "Published"),
                    Style::default().fg(Color::Green),
                )
            } else {
                Span::styled(format!("{:<10}", "Private"), Style::default().fg(Color::Red))
            };
            let base = if selected {
                Style::default().bg(Color::DarkGray).fg(Color::White)
            } else {
                Style::default()
            };
            let line = Line::from(vec![
                Span::styled(
                    format!("  {:<title_width$} ", truncate(&survey.title, title_width)),
                    base,
                ),
                status,
                Span::styled(format!(" {:>4}", survey.questions.len()), base),
                Span::styled(
                    format!(" {:<12}", date_only(&survey.insert_date)),
                    Style::default().fg(Color::DarkGray),
                ),
            ]);
            ListItem::new(line).style(if selected {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            })
        }))
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}

fn draw_creator(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(5),
        ])
        .split(area);

    let focused = |focus: CreatorFocus| {
        if app.creator_focus == focus {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    };

    let title_text = if app.creator_focus == CreatorFocus::Title {
        format!("{}_", app.draft.title)
    } else {
        app.draft.title.clone()
    };
    let title_field = Paragraph::new(title_text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Title ")
            .border_style(focused(CreatorFocus::Title)),
    );
    frame.render_widget(title_field, chunks[0]);

    let editor_title = if app.draft.is_editing() {
        " Edit Question "
    } else {
        " New Question "
    };
    let editor_text = if app.creator_focus == CreatorFocus::Editor {
        format!("{}_", app.draft.editor)
    } else {
        app.draft.editor.clone()
    };
    let editor_field = Paragraph::new(editor_text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(editor_title)
            .border_style(focused(CreatorFocus::Editor)),
    );
    frame.render_widget(editor_field, chunks[1]);

    let visibility = match app.draft.visibility {
        Visibility::Published => Span::styled("Published", Style::default().fg(Color::Green)),
        Visibility::Private => Span::styled("Private", Style::default().fg(Color::Red)),
    };
    let questions_title = Line::from(vec![
        Span::raw(format!(
            " Questions ({}/{}) — ",
            app.draft.questions.len(),
            MAX_QUESTIONS
        )),
        visibility,
        Span::raw(" "),
    ]);

    let items: Vec<ListItem> = app
        .draft
        .questions
        .iter()
        .enumerate()
        .map(|(i, question)| {
            let selected =
                i == app.selected_question && app.creator_focus == CreatorFocus::Questions;
            let editing = app.draft.edited_question_id == Some(question.id);
            let marker = if editing { "*" } else { " " };
            let style = if selected {
                Style::default().bg(Color::DarkGray).fg(Color::White)
            } else if editing {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            ListItem::new(format!("{} {:>2}. {}", marker, i + 1, question.content)).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(questions_title)
            .border_style(focused(CreatorFocus::Questions)),
    );
    frame.render_widget(list, chunks[2]);
}

fn draw_detail(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let Some(survey) = app.detail_survey() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(5)])
        .split(area);

    let status = if survey.published {
        Span::styled("Published", Style::default().fg(Color::Green))
    } else {
        Span::styled("Private", Style::default().fg(Color::Red))
    };
    let info_lines = vec![
        Line::from(vec![
            Span::styled(
                survey.title.clone(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            status,
        ]),
        Line::from(vec![
            Span::raw("Code: "),
            Span::styled(survey.survey_code.clone(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(Span::styled(
            format!(
                "{} questions, created {}",
                survey.questions.len(),
                date_only(&survey.insert_date)
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let info = Paragraph::new(info_lines)
        .block(Block::default().borders(Borders::ALL).title(" Survey "))
        .wrap(Wrap { trim: true });
    frame.render_widget(info, chunks[0]);

    if app.show_scores {
        let split = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(chunks[1]);
        draw_submission_list(frame, split[0], app);
        draw_submission_scores(frame, split[1], app);
    } else {
        draw_submission_list(frame, chunks[1], app);
    }
}

fn draw_submission_list(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let title = format!(" Submissions ({}) ", app.submissions.len());
    let block = Block::default().borders(Borders::ALL).title(title);

    if app.submissions.is_empty() {
        let empty = Paragraph::new("No submissions yet.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block)
            .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .submissions
        .iter()
        .enumerate()
        .map(|(i, doc)| {
            let selected = i == app.selected_submission;
            let style = if selected {
                Style::default().bg(Color::DarkGray).fg(Color::White)
            } else {
                Style::default()
            };
            let line = format!(
                " {}  {}",
                submission_summary(&doc.data),
                date_only(&doc.data.insert_date)
            );
            ListItem::new(line).style(style)
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}

fn draw_submission_scores(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let block = Block::default().borders(Borders::ALL).title(" Scores ");

    let Some(survey) = app.detail_survey() else {
        frame.render_widget(block, area);
        return;
    };
    let Some(doc) = app.submissions.get(app.selected_submission) else {
        frame.render_widget(block, area);
        return;
    };

    let lines: Vec<Line> = survey
        .questions
        .iter()
        .zip(doc.data.scores.iter())
        .enumerate()
        .map(|(i, (question, score))| {
            let label = score_label(score);
            let label_style = match score.is_answered() {
                true => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                false => Style::default().fg(Color::DarkGray),
            };
            Line::from(vec![
                Span::styled(
                    format!("{:>2}. ", i + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(format!(
                    "{} ",
                    truncate(&question.content, area.width.saturating_sub(10) as usize)
                )),
                Span::styled(label, label_style),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn draw_participate(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let block = Block::default().borders(Borders::ALL).title(" Participate ");
    frame.render_widget(block, area);

    let input_area = centered_popup(56, 3, area);
    let input = Paragraph::new(format!("{}_", app.code_input)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Survey Code ")
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(input, input_area);

    let hint_area = Rect::new(
        input_area.x,
        input_area.y + 3,
        input_area.width,
        2,
    );
    let hint = Paragraph::new("Paste the code you received, e.g. anna:x7Fq2:9c1d03a2b4e5f6a7")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(hint, hint_area);
}

fn draw_filler(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let Some(filler) = &app.filler else {
        return;
    };

    let filled = filler.scores.iter().filter(|s| !s.is_unfilled()).count();
    let title = format!(" Questions ({}/{} filled) ", filled, filler.scores.len());
    let block = Block::default().borders(Borders::ALL).title(title);

    let inner_width = area.width.saturating_sub(2) as usize;
    let content_width = inner_width.saturating_sub(18).max(10);

    let items: Vec<ListItem> = filler
        .survey
        .questions
        .iter()
        .zip(filler.scores.iter())
        .enumerate()
        .map(|(i, (question, score))| {
            let selected = i == filler.selected;
            let base = if selected {
                Style::default().bg(Color::DarkGray).fg(Color::White)
            } else {
                Style::default()
            };
            let label = score_label(score);
            let label_style = if score.is_unfilled() {
                base.fg(Color::Red)
            } else if selected {
                base.add_modifier(Modifier::BOLD)
            } else {
                base.fg(Color::Green)
            };
            let line = Line::from(vec![
                Span::styled(
                    format!(" {:>2}. {:<content_width$} ", i + 1, truncate(&question.content, content_width)),
                    base,
                ),
                Span::styled(format!("[0-{}] ", MAX_SCORE), Style::default().fg(Color::DarkGray)),
                Span::styled(format!("{:<9}", label), label_style),
            ]);
            ListItem::new(line).style(base)
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let creator_hint;
    let help_text = match app.screen {
        Screen::Welcome => "[j/k] Nav  [Enter] Select  [q] Quit",
        Screen::SignIn | Screen::SignUp => "[Tab] Next field  [Enter] Next / Submit  [Esc] Back",
        Screen::Surveys => {
            "[j/k] Nav  [Enter] Open  [n] New survey  [p] Participate  [r] Refresh  [o] Sign out  [q] Quit"
        }
        Screen::Creator => match app.creator_focus {
            CreatorFocus::Title => "[Tab] Switch focus  [Enter] To question editor  [Esc] Back",
            CreatorFocus::Editor => {
                if app.draft.is_editing() {
                    "[Enter] Save change  [Esc] Stop editing  [Tab] Switch focus"
                } else {
                    "[Enter] Add question  [Tab] Switch focus  [Esc] Back"
                }
            }
            CreatorFocus::Questions => {
                creator_hint = format!(
                    "[e] Edit  [d] Remove  [v] Visibility: {}  [s] Save survey  [Esc] Back",
                    match app.draft.visibility {
                        Visibility::Published => "Published",
                        Visibility::Private => "Private",
                    }
                );
                creator_hint.as_str()
            }
        },
        Screen::Detail => "[j/k] Nav  [f] Toggle scores  [p] Publish  [d] Delete  [Esc] Back",
        Screen::Participate => "[Enter] Look up code  [Esc] Back  Type the survey code...",
        Screen::Filler => {
            "[j/k] Question  [0-9] Score  [←/→] Adjust  [n] No Answer  [s] Submit  [Esc] Back"
        }
    };

    let footer = Paragraph::new(help_text)
        .style(Style::default().bg(Color::Black).fg(Color::Green))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

fn draw_confirm_popup(frame: &mut Frame, area: Rect, action: ConfirmAction) {
    let message = action.message();
    let width = (message.chars().count() as u16 + 6).max(40).min(area.width);
    let popup_area = centered_popup(width, 5, area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Confirm ")
        .border_style(Style::default().fg(Color::Red));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let message_area = Rect::new(inner.x, inner.y, inner.width, 1);
    let message_widget = Paragraph::new(Line::from(Span::styled(
        message,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(message_widget, message_area);

    let options_area = Rect::new(
        inner.x,
        inner.y + inner.height.saturating_sub(1),
        inner.width,
        1,
    );
    let options_line = Line::from(vec![
        Span::styled("[", Style::default().fg(Color::DarkGray)),
        Span::styled(
            "Y",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("]es  ", Style::default().fg(Color::DarkGray)),
        Span::styled("[", Style::default().fg(Color::DarkGray)),
        Span::styled(
            "N",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::styled("]o", Style::default().fg(Color::DarkGray)),
    ]);
    let options_widget = Paragraph::new(options_line);
    frame.render_widget(options_widget, options_area);
}
