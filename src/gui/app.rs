use crate::config::{self, Config};
use crate::events::AppEvent;
use crate::gui::dial::{self, DialState};
use crate::gui::theme::{self, DialColors};
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

pub struct AppModel {
    pub state: Rc<RefCell<DialState>>,
    pub config: Rc<RefCell<Config>>,
    pub drawing_area: gtk::DrawingArea,
}

#[derive(Debug)]
pub enum AppMsg {
    Tap,
    Resize(i32, i32),
    ConfigReload,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (DialState, Config, async_channel::Receiver<AppEvent>);
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Fan Dial"),
            set_default_width: 400,
            set_default_height: 400,
            add_css_class: "fandial-window",

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    if key == gtk::gdk::Key::Return || key == gtk::gdk::Key::space {
                        sender.input(AppMsg::Tap);
                        return glib::Propagation::Stop;
                    }
                    glib::Propagation::Proceed
                }
            },

            #[name = "drawing_area"]
            gtk::DrawingArea {
                set_hexpand: true,
                set_vexpand: true,
                add_css_class: "fandial-dial",

                connect_resize[sender] => move |_, width, height| {
                    sender.input(AppMsg::Resize(width, height));
                },

                add_controller = gtk::GestureClick {
                    connect_released[sender] => move |_, _, _, _| {
                        sender.input(AppMsg::Tap);
                    }
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (state, config, rx) = init;

        theme::load_css();

        let state = Rc::new(RefCell::new(state));
        let config = Rc::new(RefCell::new(config));

        let model = AppModel {
            state: state.clone(),
            config: config.clone(),
            drawing_area: gtk::DrawingArea::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();
        model.update_accessible();

        let state_draw = model.state.clone();
        let config_draw = model.config.clone();
        widgets
            .drawing_area
            .set_draw_func(move |drawing_area, cr, _, _| {
                let config = config_draw.borrow();
                let style_context = drawing_area.style_context();
                let colors = DialColors::from_context(&style_context, &config.palette);
                if let Err(e) = dial::draw(cr, &state_draw.borrow(), &colors, &config.labels) {
                    log::error!("Drawing error: {}", e);
                }
            });

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Tap => {
                let speed = self.state.borrow_mut().advance();
                log::debug!("Fan speed set to {}", speed);
                self.update_accessible();
                self.drawing_area.queue_draw();
            }
            AppMsg::Resize(width, height) => {
                self.state.borrow_mut().resize(width, height);
            }
            AppMsg::ConfigReload => match config::load_config() {
                Ok(new_config) => {
                    *self.config.borrow_mut() = new_config;
                    self.update_accessible();
                    self.drawing_area.queue_draw();
                    log::info!("Configuration reloaded");
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
        }
    }
}

impl AppModel {
    fn update_accessible(&self) {
        let state = self.state.borrow();
        let config = self.config.borrow();
        self.drawing_area.update_property(&[
            gtk::accessible::Property::Label(state.speed.label(&config.labels)),
            gtk::accessible::Property::Description(state.speed.action_hint()),
        ]);
    }
}
