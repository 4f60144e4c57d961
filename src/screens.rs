//! Screen registry: the static menu content and its navigation graph.
//!
//! A [`Screen`] is pure data — a display payload plus keyboard rows — and the
//! registry maps every [`ScreenId`] to one. Callback payload strings coming
//! off the wire are parsed with [`ScreenId::parse`]; anything unknown is
//! rejected there, so lookups against the registry itself are total.

use std::collections::HashMap;

use crate::config::BotConfig;
use crate::stylize::thin;

/// Identifier of a single menu state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenId {
    Main,
    Menu,
    StudClubs,
    Contacts,
    Laundry,
    CaseClub,
    Kbk,
    Falcon,
    BuddyTeam,
    Golf,
    SportCulture,
    ContactTeachers,
    ContactAdmin,
    ContactCurators,
}

impl ScreenId {
    /// Every screen the registry serves.
    pub const ALL: [ScreenId; 14] = [
        ScreenId::Main,
        ScreenId::Menu,
        ScreenId::StudClubs,
        ScreenId::Contacts,
        ScreenId::Laundry,
        ScreenId::CaseClub,
        ScreenId::Kbk,
        ScreenId::Falcon,
        ScreenId::BuddyTeam,
        ScreenId::Golf,
        ScreenId::SportCulture,
        ScreenId::ContactTeachers,
        ScreenId::ContactAdmin,
        ScreenId::ContactCurators,
    ];

    /// The opaque callback payload carried by inline buttons.
    pub fn as_str(self) -> &'static str {
        match self {
            ScreenId::Main => "back_main",
            ScreenId::Menu => "menu",
            ScreenId::StudClubs => "studclubs",
            ScreenId::Contacts => "contacts",
            ScreenId::Laundry => "laundry",
            ScreenId::CaseClub => "case_club",
            ScreenId::Kbk => "kbk",
            ScreenId::Falcon => "falcon",
            ScreenId::BuddyTeam => "buddyteam",
            ScreenId::Golf => "golf",
            ScreenId::SportCulture => "sport_culture",
            ScreenId::ContactTeachers => "contact_teachers",
            ScreenId::ContactAdmin => "contact_admin",
            ScreenId::ContactCurators => "contact_curators",
        }
    }

    /// Parse an inbound callback payload. Unknown payloads yield `None` and
    /// the dispatcher treats them as a no-op.
    pub fn parse(data: &str) -> Option<ScreenId> {
        ScreenId::ALL.into_iter().find(|id| id.as_str() == data)
    }
}

/// What a screen displays: a plain text card or a photo with a caption.
#[derive(Debug, Clone, PartialEq)]
pub enum CardPayload {
    Text(String),
    Photo { url: String, caption: String },
}

impl CardPayload {
    /// The human-readable part of the payload, whichever kind it is.
    pub fn text(&self) -> &str {
        match self {
            CardPayload::Text(text) => text,
            CardPayload::Photo { caption, .. } => caption,
        }
    }
}

/// A navigation option: either jump to another screen or open a link.
#[derive(Debug, Clone, PartialEq)]
pub enum NavAction {
    Go(ScreenId),
    Link(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavButton {
    pub label: String,
    pub action: NavAction,
}

/// One renderable menu state.
#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    pub payload: CardPayload,
    pub keyboard: Vec<Vec<NavButton>>,
}

fn go(label: &str, target: ScreenId) -> NavButton {
    NavButton {
        label: label.to_string(),
        action: NavAction::Go(target),
    }
}

fn link(label: &str, url: &str) -> NavButton {
    NavButton {
        label: label.to_string(),
        action: NavAction::Link(url.to_string()),
    }
}

fn back(target: ScreenId) -> NavButton {
    go("⬅️ Назад", target)
}

/// Maps every [`ScreenId`] to its content. Built once at startup from the
/// static menu text plus the configured link targets.
pub struct ScreenRegistry {
    screens: HashMap<ScreenId, Screen>,
}

impl ScreenRegistry {
    pub fn new(config: &BotConfig) -> Self {
        let mut screens = HashMap::new();
        for id in ScreenId::ALL {
            screens.insert(id, build_screen(id, config));
        }
        Self { screens }
    }

    pub fn get(&self, id: ScreenId) -> Option<&Screen> {
        self.screens.get(&id)
    }
}

fn build_screen(id: ScreenId, config: &BotConfig) -> Screen {
    match id {
        ScreenId::Main => main_screen(config),
        ScreenId::Menu => Screen {
            payload: CardPayload::Text("📖 Меню:".to_string()),
            keyboard: vec![
                vec![go("🧺 Прачка", ScreenId::Laundry)],
                vec![link("🔎 Потеряшки", &config.lost_and_found_url)],
                vec![link("📰 Новости", &config.news_url)],
                vec![back(ScreenId::Main)],
            ],
        },
        ScreenId::StudClubs => Screen {
            payload: CardPayload::Text("🎭 Студклубы:".to_string()),
            keyboard: vec![
                vec![go("📊 CASE Club", ScreenId::CaseClub)],
                vec![go("🎤 КБК", ScreenId::Kbk)],
                vec![go("💼 Falcon Business Club", ScreenId::Falcon)],
                vec![go("👫 BuddyTeam", ScreenId::BuddyTeam)],
                vec![go("⛳ SPbU Golf Club", ScreenId::Golf)],
                vec![go("⚽ Sport and Culture", ScreenId::SportCulture)],
                vec![back(ScreenId::Main)],
            ],
        },
        ScreenId::Contacts => Screen {
            payload: CardPayload::Text("📞 Контакты:".to_string()),
            keyboard: vec![
                vec![go("👩‍🏫 Преподаватели", ScreenId::ContactTeachers)],
                vec![go("🏛 Администрация", ScreenId::ContactAdmin)],
                vec![go("🧑‍🎓 Кураторы", ScreenId::ContactCurators)],
                vec![back(ScreenId::Main)],
            ],
        },
        ScreenId::Laundry => text_leaf(laundry_text(), ScreenId::Menu),
        ScreenId::CaseClub => text_leaf(case_club_text(), ScreenId::StudClubs),
        ScreenId::Kbk => text_leaf(kbk_text(), ScreenId::StudClubs),
        ScreenId::Falcon => text_leaf(
            format!(
                "💼 {} — студенческое бизнес-сообщество СПбГУ.",
                thin("Falcon Business Club")
            ),
            ScreenId::StudClubs,
        ),
        ScreenId::BuddyTeam => text_leaf(
            format!(
                "👫 {} — студенческое объединение для помощи иностранным студентам адаптироваться в СПбГУ.",
                thin("BuddyTeam")
            ),
            ScreenId::StudClubs,
        ),
        ScreenId::Golf => text_leaf(
            format!("⛳ {} — клуб любителей гольфа в СПбГУ.", thin("SPbU Golf Club")),
            ScreenId::StudClubs,
        ),
        ScreenId::SportCulture => text_leaf(
            format!(
                "⚽ {} — студенческое сообщество, объединяющее спорт и культуру в СПбГУ.",
                thin("Sport and Culture")
            ),
            ScreenId::StudClubs,
        ),
        ScreenId::ContactTeachers => text_leaf(teachers_text(), ScreenId::Contacts),
        ScreenId::ContactAdmin => text_leaf(admin_text(), ScreenId::Contacts),
        ScreenId::ContactCurators => text_leaf(
            "🧑‍🎓 Кураторы помогают первокурсникам адаптироваться.\n\n\
             Кураторский тг канал: @gsomates"
                .to_string(),
            ScreenId::Contacts,
        ),
    }
}

fn main_screen(config: &BotConfig) -> Screen {
    let welcome = "Привет! 👋\n\n\
                   Я твой ассистент в СПбГУ.\n\n\
                   Помогу с расписанием, расскажу про студклубы, дам полезные ссылки и контакты. 👇"
        .to_string();
    let payload = match &config.welcome_photo_url {
        Some(url) => CardPayload::Photo {
            url: url.clone(),
            caption: welcome,
        },
        None => CardPayload::Text(welcome),
    };
    Screen {
        payload,
        keyboard: vec![
            vec![
                link("📚 TimeTable", &config.timetable_url),
                go("🎭 Студклубы", ScreenId::StudClubs),
            ],
            vec![go("📞 Контакты", ScreenId::Contacts), go("📖 Меню", ScreenId::Menu)],
        ],
    }
}

fn text_leaf(text: impl Into<String>, parent: ScreenId) -> Screen {
    Screen {
        payload: CardPayload::Text(text.into()),
        keyboard: vec![vec![back(parent)]],
    }
}

fn laundry_text() -> String {
    "🧺 Прачка СПбГУ\n\n\
     Первый корпус:\nhttps://docs.google.com/spreadsheets/d/1P0C0cLeAVVUPPkjjJ2KXgWVTPK4TEX6aqUblOCUnepI/edit?usp=sharing\n\n\
     Второй корпус:\nhttps://docs.google.com/spreadsheets/d/1ztCbv9GyKyNQe5xruOHnNnLVwNPLXOcm9MmYw2nP5kU/edit?usp=drivesdk\n\n\
     Третий корпус:\nhttps://docs.google.com/spreadsheets/d/1xiEC3lD5_9b9Hubot1YH5m7_tOsqMjL39ZIzUtuWffk/edit?usp=sharing\n\n\
     Четвертый корпус:\nhttps://docs.google.com/spreadsheets/d/1D-EFVHeAd44Qe7UagronhSF5NS4dP76Q2_CnX1wzQis/edit\n\n\
     Пятый корпус:\nhttps://docs.google.com/spreadsheets/d/1XFIQ6GCSrwcBd4FhhJpY897udcCKx6kzOZoTXdCjqhI/edit?usp=sharing\n\n\
     Шестой корпус:\nhttps://docs.google.com/spreadsheets/d/140z6wAzC4QR3SKVec7QLJIZp4CHfNacVDFoIZcov1aI/edit?usp=sharing\n\n\
     Седьмой корпус:\nhttps://docs.google.com/spreadsheets/d/197PG09l5Tl9PkGJo2zqySbOTKdmcF_2mO4D_VTMrSa4/edit?usp=drivesdk\n\n\
     Восьмой корпус:\nhttps://docs.google.com/spreadsheets/d/1EBvaLpxAK5r91yc-jaCa8bj8iLumwJvGFjTDlEArRLA/edit?usp=sharing\n\n\
     Девятый корпус:\nhttps://docs.google.com/spreadsheets/d/1wGxLQLF5X22JEqMlq0mSVXMyrMQslXbemo-Z8YQcSS8/edit?usp=sharing"
        .to_string()
}

fn case_club_text() -> String {
    format!(
        "📊 {}\n\n\
         GSOM SPbU Case Club — это студенческое объединение, созданное для помощи студентам \
         на пути к развитию в сфере консалтинга.\n\n\
         За свою историю оргкомитет кейс клуба организовал огромное количество мероприятий, \
         помогающих студентам разных вузов узнать больше о решении кейсов, специфике индустрии \
         консалтинга и отборе в компании.\n\n\
         Не пропускай анонсы мероприятий в нашем Телеграм-канале 👉 t.me/gsomspbucaseclub \
         и подавайся в команду!",
        thin("GSOM SPbU Case Club")
    )
}

fn kbk_text() -> String {
    "КБК\n\n\
     КБК - это уникальный всероссийский проект для обмена знаниями о Китае, \
     созданный студентами и молодыми профессионалами со всей России.\n\n\
     Он объединяет массу актуальных форматов: от нескучных лекций и мастер-классов \
     до полезных карьерных консультаций и ярких творческих выступлений.\n\n\
     Погрузиться в атмосферу Китая теперь можно и в онлайн-режиме — через наш \
     эксклюзивный контент и медиа-шоу, которое захватывает с первой серии. \
     С нами ты получишь экспертные знания, полезные связи и крутые карьерные возможности.\n\n\
     Следи за КБК из любой точки нашей страны и готовься к кульминации сезона — \
     масштабному форуму, который пройдет в стенах лучшей бизнес-школы России \
     ВШМ СПбГУ уже этой весной!\n\n\
     🌐 https://forum-cbc.ru/\n\
     📘 https://vk.com/forumcbc\n\
     📲 https://t.me/forumcbc"
        .to_string()
}

fn teachers_text() -> String {
    "👩‍🏫 Преподаватели СПбГУ\n\n\
     — Ирина Владимировна Марченко — i.marchencko@gsom.spbu.ru;\n\n\
     — Татьяна Николаевна Клемина — klemina@gsom.spbu.ru;\n\n\
     — Ирина Анатольевна Лешева — lesheva@gsom.spbu.ru;\n\n\
     — Елена Вячеславовна Воронко — e.voronko@gsom.spbu.ru;\n\n\
     — Сергей Игоревич Кирюков — kiryukov@gsom.spbu.ru;\n\n\
     — Александр Федорович Денисов — denisov@gsom.spbu.ru;\n\n\
     — Анастасия Алексеевна Голубева — golubeva@gsom.spbu.ru;\n\n\
     — Татьяна Сергеевна Станко — t.stanko@gsom.spbu.ru;\n\n\
     — Елена Моисеевна Рогова — e.rogova@gsom.spbu.ru;"
        .to_string()
}

fn admin_text() -> String {
    "🏛 Администрация СПбГУ\n\n\
     — Приёмная директора ВШМ СПбГУ, Ольги Константиновны Дергуновой — office@gsom.spbu.ru, +7 (812) 323-84-56\n\n\
     — Бакалавриат — Дирекция программ:\n\n\
     — Виталий Викторович Мишучков, директор — v.mishuchkov@gsom.spbu.ru, +7 (812) 363-60-00;\n\n\
     — Учебный отдел (бакалавриат): Юлия Реводько — y.revodko@gsom.spbu.ru, +7 (812) 500-00-03;\n\n\
     — Анастасия Захаржевская — a.zakharzhevskaia@gsom.spbu.ru, доб. 7531.\n\n\
     — Международный отдел (обмены, Double Degree) — exchange@gsom.spbu.ru, +7 (812) 323-84-47;\n\n\
     — Центр карьер — директор Елизавета Троянова: e.troyanova@gsom.spbu.ru, +7 (960) 270-90-16;\n\n\
     — IT-поддержка GSOM — support@gsom.spbu.ru; телефон: +7 (812) 323-84-54"
        .to_string()
}
