use iced::{
    alignment, executor, Color,
    widget::{button, column, container, row, scrollable, text, text_input, Space},
    widget::image::{Handle as ImageHandle, Image},
    Application, Command, Element, Length, Pixels, Settings, Theme as IcedTheme, Padding,
};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::appman;
use crate::catalog::{self, AppEntry};
use crate::config::{self, Config};
use crate::parse;
use crate::suggested::{self, SuggestedApp};

mod theme;
mod styles;

use theme::Theme as AppTheme;
use styles::{AccentButtonStyle, ButtonKind, CardStyle, ListScrollableStyle, SearchInputStyle};

pub fn run(config: Config) -> iced::Result {
    eprintln!("[DEBUG] gui::run() called");

    let window_settings = iced::window::Settings {
        size: iced::Size::new(960.0, 640.0),
        resizable: true,
        min_size: Some(iced::Size::new(720.0, 480.0)),
        ..Default::default()
    };

    let settings = Settings {
        window: window_settings,
        flags: config,
        default_text_size: Pixels(14.0),
        antialiasing: true,
        id: None,
        fonts: Vec::new(),
        default_font: iced::Font::DEFAULT,
    };

    AppNestGui::run(settings)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Installed,
    Available,
    Suggested,
    About,
}

/// In-window modal. While one is open it replaces the tab content, the same
/// way the blocking message boxes of a conventional desktop toolkit would.
#[derive(Debug, Clone)]
enum Dialog {
    Info {
        title: String,
        body: String,
        links: Vec<String>,
    },
    Error {
        body: String,
    },
    ConfirmRemove {
        name: String,
    },
}

#[derive(Debug, Clone)]
pub enum Message {
    TabChanged(Tab),
    ThemeToggled,
    // Installed tab
    RefreshInstalled,
    InstalledLoaded(Result<Vec<AppEntry>, String>),
    SelectInstalled(String),
    UpdateSelected,
    UpdateAll,
    RemoveSelected,
    RemoveConfirmed(String),
    // Available tab
    AvailableLoaded(Vec<AppEntry>),
    SearchQueryChanged(String),
    SearchSubmitted,
    SelectAvailable(String),
    InstallSelected,
    // Suggested tab
    SuggestedLoaded(Vec<SuggestedApp>),
    IconsFetched(Vec<(String, Option<PathBuf>)>),
    SelectSuggested(String),
    InstallSuggested,
    // Shared operation plumbing
    AboutRequested,
    AboutLoaded { name: String, result: Result<String, String> },
    OperationFinished { title: String, result: Result<String, String> },
    OpenUrl(String),
    DialogDismissed,
}

pub struct AppNestGui {
    config: Config,
    current_tab: Tab,
    theme: AppTheme,
    border_radius: f32,

    installed_apps: Vec<AppEntry>,
    selected_installed: Option<String>,

    // Base list is read once per session; search derives views from it.
    available_apps: Vec<AppEntry>,
    shown_available: Vec<AppEntry>,
    available_loaded: bool,
    search_query: String,
    selected_available: Option<String>,

    suggested_apps: Vec<SuggestedApp>,
    suggested_loaded: bool,
    icons: HashMap<String, PathBuf>,
    selected_suggested: Option<String>,

    // One interactive backend invocation at a time: while set, the tab
    // content is replaced by a wait indicator and no controls are rendered.
    busy: Option<String>,
    dialog: Option<Dialog>,
}

impl AppNestGui {
    fn refresh_installed(&mut self) -> Command<Message> {
        self.busy = Some("Refreshing installed applications...".to_string());
        Command::perform(appman::list_installed(), |result| {
            Message::InstalledLoaded(result.map_err(|e| e.to_string()))
        })
    }

    fn selection_for_current_tab(&self) -> Option<String> {
        match self.current_tab {
            Tab::Installed => self.selected_installed.clone(),
            Tab::Available => self.selected_available.clone(),
            Tab::Suggested => self.selected_suggested.clone(),
            Tab::About => None,
        }
    }

    fn install_app(&mut self, name: String) -> Command<Message> {
        self.busy = Some(format!("Installing {}...", name));
        Command::perform(appman::install(name), |result| Message::OperationFinished {
            title: "Installation Complete".to_string(),
            result: result
                .map(|output| parse::install_summary(&output))
                .map_err(|e| e.to_string()),
        })
    }

    fn require_selection(&mut self, action: &str) -> Option<String> {
        let selection = self.selection_for_current_tab();
        if selection.is_none() {
            self.dialog = Some(Dialog::Info {
                title: "No Selection".to_string(),
                body: format!("Please select an application to {}.", action),
                links: Vec::new(),
            });
        }
        selection
    }
}

impl Application for AppNestGui {
    type Message = Message;
    type Theme = IcedTheme;
    type Executor = executor::Default;
    type Flags = Config;

    fn new(config: Config) -> (AppNestGui, Command<Message>) {
        let mut gui = AppNestGui {
            config,
            current_tab: Tab::Installed,
            theme: AppTheme::Dark,
            border_radius: 10.0,
            installed_apps: Vec::new(),
            selected_installed: None,
            available_apps: Vec::new(),
            shown_available: Vec::new(),
            available_loaded: false,
            search_query: String::new(),
            selected_available: None,
            suggested_apps: Vec::new(),
            suggested_loaded: false,
            icons: HashMap::new(),
            selected_suggested: None,
            busy: None,
            dialog: None,
        };

        let cmd = gui.refresh_installed();
        (gui, cmd)
    }

    fn title(&self) -> String {
        String::from("AppNest - AppImage Manager")
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::TabChanged(tab) => {
                self.current_tab = tab;
                match tab {
                    Tab::Available if !self.available_loaded => {
                        self.busy = Some("Loading available applications...".to_string());
                        Command::perform(
                            catalog::load_available_async(config::catalog_path()),
                            Message::AvailableLoaded,
                        )
                    }
                    Tab::Suggested if !self.suggested_loaded => {
                        self.busy = Some("Loading suggested applications...".to_string());
                        let url = self.config.suggested_feed_url.clone();
                        Command::perform(suggested::load_suggested(url), Message::SuggestedLoaded)
                    }
                    _ => Command::none(),
                }
            }
            Message::ThemeToggled => {
                self.theme = match self.theme {
                    AppTheme::Dark => AppTheme::Light,
                    AppTheme::Light => AppTheme::Dark,
                };
                Command::none()
            }
            Message::RefreshInstalled => self.refresh_installed(),
            Message::InstalledLoaded(result) => {
                self.busy = None;
                match result {
                    Ok(apps) => {
                        self.selected_installed = None;
                        self.installed_apps = apps;
                    }
                    Err(e) => self.dialog = Some(Dialog::Error { body: e }),
                }
                Command::none()
            }
            Message::SelectInstalled(name) => {
                self.selected_installed = Some(name);
                Command::none()
            }
            Message::UpdateSelected => match self.require_selection("update") {
                Some(name) => {
                    self.busy = Some(format!("Updating {}...", name));
                    Command::perform(appman::update(Some(name)), |result| {
                        Message::OperationFinished {
                            title: "Update Success".to_string(),
                            result: result.map_err(|e| e.to_string()),
                        }
                    })
                }
                None => Command::none(),
            },
            Message::UpdateAll => {
                self.busy = Some("Updating all applications...".to_string());
                Command::perform(appman::update(None), |result| Message::OperationFinished {
                    title: "Update All Success".to_string(),
                    result: result.map_err(|e| e.to_string()),
                })
            }
            Message::RemoveSelected => {
                if let Some(name) = self.require_selection("remove") {
                    self.dialog = Some(Dialog::ConfirmRemove { name });
                }
                Command::none()
            }
            Message::RemoveConfirmed(name) => {
                self.dialog = None;
                self.busy = Some(format!("Removing {}...", name));
                Command::perform(appman::remove(name), |result| Message::OperationFinished {
                    title: "Removal Success".to_string(),
                    result: result.map_err(|e| e.to_string()),
                })
            }
            Message::AvailableLoaded(apps) => {
                self.busy = None;
                self.available_loaded = true;
                self.available_apps = apps.clone();
                self.shown_available = apps;
                Command::none()
            }
            Message::SearchQueryChanged(query) => {
                self.search_query = query;
                // Short queries leave the current view untouched
                if self.available_loaded
                    && self.search_query.trim().chars().count() >= catalog::MIN_SEARCH_LEN
                {
                    self.shown_available =
                        catalog::filter_apps(&self.available_apps, &self.search_query);
                    self.selected_available = None;
                }
                Command::none()
            }
            Message::SearchSubmitted => {
                if self.search_query.trim().is_empty() {
                    self.dialog = Some(Dialog::Info {
                        title: "Input Required".to_string(),
                        body: "Please enter a search term.".to_string(),
                        links: Vec::new(),
                    });
                } else if self.available_loaded {
                    self.shown_available =
                        catalog::filter_apps(&self.available_apps, &self.search_query);
                    self.selected_available = None;
                }
                Command::none()
            }
            Message::SelectAvailable(name) => {
                self.selected_available = Some(name);
                Command::none()
            }
            Message::InstallSelected => match self.require_selection("install") {
                Some(name) => self.install_app(name),
                None => Command::none(),
            },
            Message::SuggestedLoaded(apps) => {
                self.busy = None;
                self.suggested_loaded = true;
                self.suggested_apps = apps.clone();
                // Icons arrive lazily; the list renders without them meanwhile
                Command::perform(
                    suggested::prefetch_icons(self.config.icon_cache_dir.clone(), apps),
                    Message::IconsFetched,
                )
            }
            Message::IconsFetched(pairs) => {
                for (name, path) in pairs {
                    if let Some(path) = path {
                        self.icons.insert(name, path);
                    }
                }
                Command::none()
            }
            Message::SelectSuggested(name) => {
                self.selected_suggested = Some(name);
                Command::none()
            }
            Message::InstallSuggested => match self.require_selection("install") {
                Some(name) => self.install_app(name),
                None => Command::none(),
            },
            Message::AboutRequested => match self.require_selection("show information about") {
                Some(name) => {
                    self.busy = Some(format!("Fetching information about {}...", name));
                    Command::perform(appman::about(name.clone()), move |result| {
                        Message::AboutLoaded {
                            name,
                            result: result.map_err(|e| e.to_string()),
                        }
                    })
                }
                None => Command::none(),
            },
            Message::AboutLoaded { name, result } => {
                self.busy = None;
                self.dialog = Some(match result {
                    Ok(output) => Dialog::Info {
                        title: format!("About - {}", name),
                        links: parse::extract_urls(&output),
                        body: output,
                    },
                    Err(e) => Dialog::Error { body: e },
                });
                Command::none()
            }
            Message::OperationFinished { title, result } => match result {
                Ok(output) => {
                    self.dialog = Some(Dialog::Info {
                        title,
                        body: output.trim().to_string(),
                        links: Vec::new(),
                    });
                    // The dialog stays on top while the list refreshes under it
                    self.refresh_installed()
                }
                Err(e) => {
                    self.busy = None;
                    self.dialog = Some(Dialog::Error { body: e });
                    Command::none()
                }
            },
            Message::OpenUrl(url) => {
                // Best effort; a missing opener is not worth a dialog
                let _ = std::process::Command::new("xdg-open").arg(url).spawn();
                Command::none()
            }
            Message::DialogDismissed => {
                self.dialog = None;
                Command::none()
            }
        }
    }

    fn view(&self) -> Element<Message> {
        let theme = self.theme;

        let content: Element<Message> = if let Some(dialog) = &self.dialog {
            self.view_dialog(dialog)
        } else if let Some(status) = &self.busy {
            self.view_busy(status)
        } else {
            let tab_content = match self.current_tab {
                Tab::Installed => self.view_installed(),
                Tab::Available => self.view_available(),
                Tab::Suggested => self.view_suggested(),
                Tab::About => self.view_about(),
            };
            column![self.view_tabs(), tab_content]
                .spacing(12)
                .into()
        };

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(Padding::new(16.0))
            .style(iced::theme::Container::Custom(Box::new(CardStyle {
                radius: 0.0,
                background: Some(theme.background()),
                outlined: false,
            })))
            .into()
    }

    fn theme(&self) -> IcedTheme {
        match self.theme {
            AppTheme::Light => IcedTheme::Light,
            AppTheme::Dark => IcedTheme::Dark,
        }
    }
}

impl AppNestGui {
    fn accent_button<'a>(
        &self,
        label: &str,
        kind: ButtonKind,
        on_press: Option<Message>,
    ) -> Element<'a, Message> {
        let theme = self.theme;
        let mut btn = button(text(label).size(14.0))
            .style(iced::theme::Button::Custom(Box::new(AccentButtonStyle {
                kind,
                radius: self.border_radius,
                accent: theme.primary(),
                danger: theme.danger(),
                text_color: match kind {
                    ButtonKind::Primary | ButtonKind::Danger => Color::BLACK,
                    ButtonKind::Secondary => theme.text(),
                },
            })))
            .padding(Padding::new(10.0));
        if let Some(message) = on_press {
            btn = btn.on_press(message);
        }
        btn.into()
    }

    fn view_tabs(&self) -> Element<Message> {
        let theme = self.theme;
        container(
            row![
                self.tab_button("Installed", Tab::Installed),
                self.tab_button("Available", Tab::Available),
                self.tab_button("Suggested", Tab::Suggested),
                self.tab_button("About", Tab::About),
                Space::with_width(Length::Fill),
                self.accent_button(
                    if theme == AppTheme::Dark { "Light" } else { "Dark" },
                    ButtonKind::Secondary,
                    Some(Message::ThemeToggled),
                ),
            ]
            .spacing(8)
            .align_items(alignment::Alignment::Center)
            .padding(Padding::new(8.0)),
        )
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(CardStyle {
            radius: self.border_radius,
            background: Some(theme.card_background()),
            outlined: true,
        })))
        .into()
    }

    fn tab_button(&self, label: &str, tab: Tab) -> Element<Message> {
        let kind = if self.current_tab == tab {
            ButtonKind::Primary
        } else {
            ButtonKind::Secondary
        };
        self.accent_button(label, kind, Some(Message::TabChanged(tab)))
    }

    fn app_row<'a>(
        &self,
        app: &'a AppEntry,
        is_selected: bool,
        on_press: Message,
    ) -> Element<'a, Message> {
        let theme = self.theme;
        button(
            container(
                column![
                    text(&app.name)
                        .size(16.0)
                        .style(iced::theme::Text::Color(theme.text())),
                    if app.description.is_empty() {
                        Element::from(Space::with_height(Length::Shrink))
                    } else {
                        Element::from(
                            text(&app.description)
                                .size(13.0)
                                .style(iced::theme::Text::Color(theme.secondary_text())),
                        )
                    },
                ]
                .spacing(2)
                .width(Length::Fill)
                .padding(Padding::new(8.0)),
            )
            .style(iced::theme::Container::Custom(Box::new(CardStyle {
                radius: self.border_radius,
                background: Some(if is_selected {
                    theme.selected_background()
                } else {
                    theme.card_background()
                }),
                outlined: is_selected,
            }))),
        )
        .on_press(on_press)
        .style(iced::theme::Button::Custom(Box::new(AccentButtonStyle {
            kind: ButtonKind::Secondary,
            radius: self.border_radius,
            accent: theme.primary(),
            danger: theme.danger(),
            text_color: theme.text(),
        })))
        .into()
    }

    fn app_list<'a>(
        &self,
        apps: &'a [AppEntry],
        selected: &Option<String>,
        on_select: fn(String) -> Message,
        empty_hint: &'a str,
    ) -> Element<'a, Message> {
        let theme = self.theme;
        if apps.is_empty() {
            return container(
                text(empty_hint)
                    .size(15.0)
                    .style(iced::theme::Text::Color(theme.secondary_text())),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x()
            .center_y()
            .into();
        }

        scrollable(
            column(
                apps.iter()
                    .map(|app| {
                        let is_selected = selected.as_deref() == Some(app.name.as_str());
                        self.app_row(app, is_selected, on_select(app.name.clone()))
                    })
                    .collect::<Vec<_>>(),
            )
            .spacing(4)
            .padding(Padding::new(4.0)),
        )
        .style(iced::theme::Scrollable::Custom(Box::new(
            ListScrollableStyle {
                accent: theme.primary(),
                radius: self.border_radius,
            },
        )))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }

    fn view_installed(&self) -> Element<Message> {
        let buttons = row![
            self.accent_button(
                "Update AppImage",
                ButtonKind::Primary,
                Some(Message::UpdateSelected),
            ),
            self.accent_button(
                "Remove AppImage",
                ButtonKind::Danger,
                Some(Message::RemoveSelected),
            ),
            self.accent_button("Update All", ButtonKind::Primary, Some(Message::UpdateAll)),
            self.accent_button(
                "Refresh List",
                ButtonKind::Secondary,
                Some(Message::RefreshInstalled),
            ),
            self.accent_button("About", ButtonKind::Secondary, Some(Message::AboutRequested)),
        ]
        .spacing(8);

        column![
            self.app_list(
                &self.installed_apps,
                &self.selected_installed,
                Message::SelectInstalled,
                "No AppImages installed yet",
            ),
            buttons,
        ]
        .spacing(10)
        .into()
    }

    fn view_available(&self) -> Element<Message> {
        let theme = self.theme;
        let search_bar = row![
            text_input("Search Applications...", &self.search_query)
                .on_input(Message::SearchQueryChanged)
                .on_submit(Message::SearchSubmitted)
                .padding(Padding::new(10.0))
                .width(Length::Fill)
                .style(iced::theme::TextInput::Custom(Box::new(SearchInputStyle {
                    radius: self.border_radius,
                    accent: theme.primary(),
                    background: theme.card_background(),
                    text_color: theme.text(),
                    placeholder: theme.secondary_text(),
                }))),
            self.accent_button("Search", ButtonKind::Primary, Some(Message::SearchSubmitted)),
        ]
        .spacing(8)
        .align_items(alignment::Alignment::Center);

        let buttons = row![
            self.accent_button(
                "Install AppImage",
                ButtonKind::Primary,
                Some(Message::InstallSelected),
            ),
            self.accent_button("About", ButtonKind::Secondary, Some(Message::AboutRequested)),
        ]
        .spacing(8);

        column![
            search_bar,
            self.app_list(
                &self.shown_available,
                &self.selected_available,
                Message::SelectAvailable,
                "No applications match the search",
            ),
            buttons,
        ]
        .spacing(10)
        .into()
    }

    fn view_suggested(&self) -> Element<Message> {
        let theme = self.theme;

        let rows: Vec<Element<Message>> = self
            .suggested_apps
            .iter()
            .map(|app| {
                let is_selected = self.selected_suggested.as_deref() == Some(app.name.as_str());
                let icon: Element<Message> = match self.icons.get(&app.name) {
                    Some(path) => Image::new(ImageHandle::from_path(path.clone()))
                        .width(Length::Fixed(48.0))
                        .height(Length::Fixed(48.0))
                        .into(),
                    None => Space::new(Length::Fixed(48.0), Length::Fixed(48.0)).into(),
                };

                button(
                    container(
                        row![
                            icon,
                            column![
                                text(&app.name)
                                    .size(16.0)
                                    .style(iced::theme::Text::Color(theme.text())),
                                text(&app.description)
                                    .size(13.0)
                                    .style(iced::theme::Text::Color(theme.secondary_text())),
                            ]
                            .spacing(2)
                            .width(Length::Fill),
                        ]
                        .spacing(12)
                        .align_items(alignment::Alignment::Center)
                        .padding(Padding::new(8.0)),
                    )
                    .style(iced::theme::Container::Custom(Box::new(CardStyle {
                        radius: self.border_radius,
                        background: Some(if is_selected {
                            theme.selected_background()
                        } else {
                            theme.card_background()
                        }),
                        outlined: is_selected,
                    }))),
                )
                .on_press(Message::SelectSuggested(app.name.clone()))
                .style(iced::theme::Button::Custom(Box::new(AccentButtonStyle {
                    kind: ButtonKind::Secondary,
                    radius: self.border_radius,
                    accent: theme.primary(),
                    danger: theme.danger(),
                    text_color: theme.text(),
                })))
                .into()
            })
            .collect();

        let list: Element<Message> = if rows.is_empty() {
            container(
                text("No suggestions right now")
                    .size(15.0)
                    .style(iced::theme::Text::Color(theme.secondary_text())),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x()
            .center_y()
            .into()
        } else {
            scrollable(column(rows).spacing(4).padding(Padding::new(4.0)))
                .style(iced::theme::Scrollable::Custom(Box::new(
                    ListScrollableStyle {
                        accent: theme.primary(),
                        radius: self.border_radius,
                    },
                )))
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        };

        column![
            list,
            row![
                self.accent_button(
                    "Install Selected App",
                    ButtonKind::Primary,
                    Some(Message::InstallSuggested),
                ),
                self.accent_button("About", ButtonKind::Secondary, Some(Message::AboutRequested)),
            ]
            .spacing(8),
        ]
        .spacing(10)
        .into()
    }

    fn view_about(&self) -> Element<Message> {
        let theme = self.theme;
        let body = "AppNest helps you manage AppImages on your system: browse a curated \
catalog, install new applications, and keep the installed ones up to date. \
All package operations are carried out by the AppMan backend, installed \
locally in your user environment, so nothing touches the system outside \
your home directory.\n\n\
Getting started:\n\
  1. Open the Available tab to search the catalog and install applications.\n\
  2. Use the Installed tab to update or remove what you already have.\n\
  3. Check the Suggested tab for a curated selection worth exploring.";

        container(
            column![
                text("Welcome to AppNest!")
                    .size(20.0)
                    .style(iced::theme::Text::Color(theme.primary())),
                text(body)
                    .size(15.0)
                    .style(iced::theme::Text::Color(theme.text())),
                row![
                    self.accent_button(
                        "AppMan documentation",
                        ButtonKind::Secondary,
                        Some(Message::OpenUrl(
                            "https://github.com/ivan-hc/AM".to_string()
                        )),
                    ),
                ]
                .spacing(8),
            ]
            .spacing(16)
            .padding(Padding::new(20.0)),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(CardStyle {
            radius: self.border_radius,
            background: Some(theme.card_background()),
            outlined: true,
        })))
        .into()
    }

    fn view_busy(&self, status: &str) -> Element<Message> {
        let theme = self.theme;
        container(
            column![
                text("Please Wait")
                    .size(20.0)
                    .style(iced::theme::Text::Color(theme.primary())),
                text(status.to_string())
                    .size(15.0)
                    .style(iced::theme::Text::Color(theme.text())),
            ]
            .spacing(12)
            .align_items(alignment::Alignment::Center),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .center_y()
        .into()
    }

    fn view_dialog(&self, dialog: &Dialog) -> Element<Message> {
        let theme = self.theme;

        let card: Element<Message> = match dialog {
            Dialog::Info { title, body, links } => {
                let mut content = column![
                    text(title.clone())
                        .size(18.0)
                        .style(iced::theme::Text::Color(theme.primary())),
                    scrollable(
                        text(body.clone())
                            .size(14.0)
                            .style(iced::theme::Text::Color(theme.text())),
                    )
                    .height(Length::Fixed(260.0)),
                ]
                .spacing(12);

                for link in links {
                    content = content.push(self.accent_button(
                        link,
                        ButtonKind::Secondary,
                        Some(Message::OpenUrl(link.clone())),
                    ));
                }

                content
                    .push(self.accent_button(
                        "OK",
                        ButtonKind::Primary,
                        Some(Message::DialogDismissed),
                    ))
                    .into()
            }
            Dialog::Error { body } => column![
                text("Error")
                    .size(18.0)
                    .style(iced::theme::Text::Color(theme.danger())),
                scrollable(
                    text(body.clone())
                        .size(14.0)
                        .style(iced::theme::Text::Color(theme.text())),
                )
                .height(Length::Fixed(260.0)),
                self.accent_button("OK", ButtonKind::Primary, Some(Message::DialogDismissed)),
            ]
            .spacing(12)
            .into(),
            Dialog::ConfirmRemove { name } => column![
                text("Confirm Removal")
                    .size(18.0)
                    .style(iced::theme::Text::Color(theme.danger())),
                text(format!("Are you sure you want to remove {}?", name))
                    .size(14.0)
                    .style(iced::theme::Text::Color(theme.text())),
                row![
                    self.accent_button(
                        "Yes",
                        ButtonKind::Danger,
                        Some(Message::RemoveConfirmed(name.clone())),
                    ),
                    self.accent_button("No", ButtonKind::Secondary, Some(Message::DialogDismissed)),
                ]
                .spacing(8),
            ]
            .spacing(12)
            .into(),
        };

        container(
            container(card)
                .width(Length::Fixed(520.0))
                .padding(Padding::new(20.0))
                .style(iced::theme::Container::Custom(Box::new(CardStyle {
                    radius: self.border_radius,
                    background: Some(theme.card_background()),
                    outlined: true,
                }))),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .center_y()
        .into()
    }
}
