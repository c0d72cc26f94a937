//! Reference tables and the initial shop-floor registry

use crate::domain::{
    BoundingBox, Flow, Machine, MachineStatus, Operation, OperationGroup, Rgb,
};

pub(super) static OPERATIONS: &[Operation] = &[
    Operation {
        id: "1",
        name: "Плазменная резка листа",
        code: Some("005"),
        description: "Раскрой листового проката по управляющей программе ЧПУ.",
        group: OperationGroup::Cutting,
        transitions: &[
            "Уложить лист на раскроечный стол",
            "Загрузить управляющую программу",
            "Выполнить резку контура",
            "Удалить грат, промаркировать детали",
        ],
    },
    Operation {
        id: "2",
        name: "Газовая резка",
        code: Some("010"),
        description: "Резка толстолистового металла кислородным суппортом.",
        group: OperationGroup::Cutting,
        transitions: &[
            "Прогреть кромку",
            "Выполнить рез",
            "Зачистить кромку",
        ],
    },
    Operation {
        id: "3",
        name: "Гильотинная резка",
        code: Some("015"),
        description: "Прямолинейная резка полос и заготовок.",
        group: OperationGroup::Cutting,
        transitions: &["Выставить упор", "Выполнить рез", "Проверить размер"],
    },
    Operation {
        id: "4",
        name: "Правка листа",
        code: None,
        description: "Устранение волнистости и коробления листа.",
        group: OperationGroup::Forming,
        transitions: &["Пропустить лист через валки", "Проверить плоскостность"],
    },
    Operation {
        id: "5",
        name: "Резка профиля",
        code: Some("020"),
        description: "Резка двутавра, швеллера и уголка ленточной пилой.",
        group: OperationGroup::Cutting,
        transitions: &[
            "Подать профиль рольгангом",
            "Установить угол реза",
            "Выполнить рез",
            "Проверить длину рулеткой",
        ],
    },
    Operation {
        id: "6",
        name: "Сверление отверстий",
        code: Some("030"),
        description: "Сверление монтажных отверстий в полках и стенке балки.",
        group: OperationGroup::Machining,
        transitions: &[
            "Закрепить балку",
            "Привязать нулевую точку",
            "Просверлить отверстия по программе",
            "Проверить межосевые расстояния",
        ],
    },
    Operation {
        id: "7",
        name: "Фрезерование кромок",
        code: Some("035"),
        description: "Подготовка кромок под сварку.",
        group: OperationGroup::Machining,
        transitions: &["Установить деталь", "Снять фаску", "Проверить угол шаблоном"],
    },
    Operation {
        id: "8",
        name: "Сборка узлов",
        code: Some("040"),
        description: "Сборка элементов конструкции на прихватках.",
        group: OperationGroup::Assembly,
        transitions: &[
            "Разложить детали по чертежу",
            "Выставить геометрию",
            "Поставить прихватки",
        ],
    },
    Operation {
        id: "9",
        name: "Полуавтоматическая сварка",
        code: Some("050"),
        description: "Сварка в среде защитных газов.",
        group: OperationGroup::Welding,
        transitions: &["Зачистить кромки", "Выполнить сварку", "Проконтролировать шов"],
    },
    Operation {
        id: "10",
        name: "Сварка под флюсом",
        code: Some("055"),
        description: "Автоматическая сварка поясных швов балок.",
        group: OperationGroup::Welding,
        transitions: &["Засыпать флюс", "Выполнить проход", "Удалить шлаковую корку"],
    },
    Operation {
        id: "11",
        name: "Вальцовка обечаек",
        code: Some("060"),
        description: "Гибка листа в обечайку заданного радиуса.",
        group: OperationGroup::Forming,
        transitions: &[
            "Подгибка кромок",
            "Вальцовка по радиусу",
            "Проверка радиуса шаблоном",
        ],
    },
    Operation {
        id: "12",
        name: "Дробеструйная очистка",
        code: Some("070"),
        description: "Подготовка поверхности перед окраской.",
        group: OperationGroup::Finishing,
        transitions: &["Загрузить изделие", "Очистить поверхность", "Обеспылить"],
    },
    Operation {
        id: "13",
        name: "Фрезерование торцов",
        code: Some("032"),
        description: "Фрезерование опорных торцов колонн.",
        group: OperationGroup::Machining,
        transitions: &[
            "Закрепить колонну",
            "Фрезеровать торец",
            "Проверить перпендикулярность",
        ],
    },
];

pub(super) static FLOWS: &[Flow] = &[
    Flow {
        id: "f1",
        name: "Линия профиля",
        sequence: &["m2", "m3"],
        color: Rgb::from_hex(0x38bdf8),
    },
    Flow {
        id: "f2",
        name: "Листовые детали",
        sequence: &["m1", "m3", "m4"],
        color: Rgb::from_hex(0xf472b6),
    },
];

fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub(super) fn machines() -> Vec<Machine> {
    vec![
        Machine {
            id: "m1".into(),
            name: "Messer MultiTherm".into(),
            model: "Плазменный комплекс ЧПУ".into(),
            description: "Основная установка для раскроя листовых деталей толщиной до 50мм. \
                Оборудована суппортом для газовой резки (до 150мм). \
                Используется для изготовления фасонных деталей колонн и связей."
                .into(),
            image: "https://images.unsplash.com/photo-1504917595217-d4dc5ebe6122?auto=format&fit=crop&q=80&w=800".into(),
            model3d: None,
            status: MachineStatus::Working,
            operations: labels(&["1"]),
            tools: labels(&[
                "Штангенциркуль ШЦ-II-250",
                "Линейка стальная 1000мм",
                "Шаблон сварщика УШС-3",
            ]),
            consumables: labels(&[
                "Сопло плазменное 130A",
                "Электрод медный",
                "Защитный колпачок каретки",
            ]),
            bbox: BoundingBox::new(50.0, 150.0, 250.0, 180.0),
        },
        Machine {
            id: "m2".into(),
            name: "Kaltenbach KBS 620".into(),
            model: "Ленточнопильный станок".into(),
            description: "Высокопроизводительный станок для резки тяжелого профиля. \
                Позволяет выполнять резы под углом до 60 градусов. \
                Интегрирован с автоматической системой рольгангов."
                .into(),
            image: "https://images.unsplash.com/photo-1537462715879-360eeb61a0ad?auto=format&fit=crop&q=80&w=800".into(),
            model3d: None,
            status: MachineStatus::Idle,
            operations: labels(&["5"]),
            tools: labels(&[
                "Угломер оптический",
                "Рулетка 10м (I класс)",
                "Маркер промышленный",
            ]),
            consumables: labels(&[
                "Полотно ленточное 54мм",
                "СОЖ концентрат Shell",
                "Гидравлические фильтры",
            ]),
            bbox: BoundingBox::new(350.0, 400.0, 300.0, 150.0),
        },
        Machine {
            id: "m3".into(),
            name: "Voortman V630".into(),
            model: "Сверлильная линия".into(),
            description: "Линия для автоматического сверления и фрезерования отверстий в балках \
                с трех сторон одновременно. Исключает ручную разметку."
                .into(),
            image: "https://images.unsplash.com/photo-1565043589221-1a6fd9ae45c7?auto=format&fit=crop&q=80&w=800".into(),
            model3d: None,
            status: MachineStatus::Repair,
            operations: labels(&["6", "13"]),
            tools: labels(&[
                "Нутромер индикаторный",
                "Набор калибров-пробок",
                "Глубиномер",
            ]),
            consumables: labels(&[
                "Сверла твердосплавные D14-D32",
                "Сменные пластины для фрезерования",
                "Датчики касания",
            ]),
            bbox: BoundingBox::new(700.0, 200.0, 200.0, 250.0),
        },
        Machine {
            id: "m4".into(),
            name: "Faccin 4HEL".into(),
            model: "4-х валковая машина".into(),
            description: "Применяется для гибки обечаек и конических элементов резервуаров. \
                ЧПУ управление обеспечивает высокую точность радиуса."
                .into(),
            image: "https://images.unsplash.com/photo-1581092160562-40aa08e78837?auto=format&fit=crop&q=80&w=800".into(),
            model3d: None,
            status: MachineStatus::Working,
            operations: labels(&["11"]),
            tools: labels(&[
                "Шаблоны радиусные R500-R2000",
                "Щупы зазоров",
                "Нивелир лазерный",
            ]),
            consumables: labels(&[
                "Смазка подшипников валов",
                "Масло Shell Tellus 46",
                "Уплотнения цилиндров",
            ]),
            bbox: BoundingBox::new(100.0, 550.0, 220.0, 200.0),
        },
    ]
}
