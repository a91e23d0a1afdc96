use crate::cards::LabelRules;
use crate::config::{ColumnKind, OutputSchema, SiteConfig, ViewConfig};

// stocks
// -------------------------------------------------------------------------------------------------

const STOCK_RENAMES: [(&str, &str); 15] = [
    ("Nº TOTAL DE PAPEIS", "QUANTIDADE DE PAPÉIS"),
    ("P/CAP.GIRO", "P/CAPITAL DE GIRO"),
    ("CNPJ:", "CNPJ"),
    ("LIQUIDEZ MÉDIA DIÁRIA", "LIQUIDEZ"),
    ("NOME DA EMPRESA:", "EMPRESA"),
    ("P/ATIVO CIRC LIQ", "P/ATIVO CIRCULANTE LÍQUIDO"),
    ("P/RECEITA (PSR)", "P/RECEITA LÍQUIDA"),
    ("VARIAÇÃO (12M)", "VARIAÇÃO DE COTAÇÃO 1 ANO"),
    ("PATRIMÔNIO/ATIVOS", "PATRIMÔNIO LÍQUIDO/ATIVOS"),
    ("DÍVIDA LÍQUIDA/PATRIMÔNIO", "DÍVIDA LÍQUIDA/PATRIMÔNIO LÍQUIDO"),
    ("DÍVIDA BRUTA/PATRIMÔNIO", "DÍVIDA BRUTA/PATRIMÔNIO LÍQUIDO"),
    ("ANO DE ESTREIA NA BOLSA:", "ANO IPO"),
    ("ANO DE FUNDAÇÃO:", "ANO FUNDAÇÃO"),
    ("NÚMERO DE FUNCIONÁRIOS:", "QUANTIDADE DE FUNCIONÁRIOS"),
    ("VALOR ATUAL", "COTAÇÃO"),
];

const STOCK_INFO: [&str; 7] = [
    "TICKET",
    "EMPRESA",
    "CNPJ",
    "ANO IPO",
    "ANO FUNDAÇÃO",
    "SETOR",
    "SEGMENTO",
];

const STOCK_PRICE: [&str; 4] = ["TICKET", "MOEDA", "COTAÇÃO", "VARIAÇÃO DE COTAÇÃO 1 ANO"];

const STOCK_KPI: [&str; 46] = [
    "TICKET",
    "MOEDA",
    "VALOR DE MERCADO",
    "VALOR DE FIRMA",
    "PATRIMÔNIO LÍQUIDO",
    "P/L",
    "P/VP",
    "P/EBITDA",
    "P/EBIT",
    "EV/EBITDA",
    "EV/EBIT",
    "P/RECEITA LÍQUIDA",
    "P/ATIVO",
    "P/CAPITAL DE GIRO",
    "P/ATIVO CIRCULANTE LÍQUIDO",
    "ROE",
    "ROIC",
    "ROA",
    "MARGEM LÍQUIDA",
    "MARGEM BRUTA",
    "MARGEM EBIT",
    "MARGEM EBITDA",
    "DIVIDEND YIELD",
    "PAYOUT",
    "DÍVIDA LÍQUIDA",
    "DÍVIDA BRUTA",
    "DÍVIDA LÍQUIDA/PATRIMÔNIO LÍQUIDO",
    "DÍVIDA LÍQUIDA/EBITDA",
    "DÍVIDA LÍQUIDA/EBIT",
    "DÍVIDA BRUTA/PATRIMÔNIO LÍQUIDO",
    "PATRIMÔNIO LÍQUIDO/ATIVOS",
    "LIQUIDEZ CORRENTE",
    "LIQUIDEZ",
    "PASSIVOS/ATIVOS",
    "CAGR RECEITAS 5 ANOS",
    "CAGR LUCROS 5 ANOS",
    "QUANTIDADE DE FUNCIONÁRIOS",
    "QUANTIDADE DE PAPÉIS",
    "ATIVOS",
    "ATIVO CIRCULANTE",
    "DISPONIBILIDADE",
    "FREE FLOAT",
    "TAG ALONG",
    "VPA",
    "LPA",
    "GIRO ATIVOS",
];

const STOCK_KPI_STRINGS: [&str; 15] = [
    "TICKET",
    "MOEDA",
    "FREE FLOAT",
    "TAG ALONG",
    "DIVIDEND YIELD",
    "PAYOUT",
    "ROA",
    "ROE",
    "ROIC",
    "CAGR LUCROS 5 ANOS",
    "CAGR RECEITAS 5 ANOS",
    "MARGEM LÍQUIDA",
    "MARGEM BRUTA",
    "MARGEM EBIT",
    "MARGEM EBITDA",
];

const STOCK_KPI_NUMERICS: [&str; 31] = [
    "VALOR DE MERCADO",
    "VALOR DE FIRMA",
    "PATRIMÔNIO LÍQUIDO",
    "QUANTIDADE DE PAPÉIS",
    "ATIVOS",
    "ATIVO CIRCULANTE",
    "DÍVIDA BRUTA",
    "DÍVIDA LÍQUIDA",
    "DISPONIBILIDADE",
    "LIQUIDEZ",
    "P/L",
    "P/VP",
    "EV/EBIT",
    "P/EBIT",
    "P/ATIVO",
    "GIRO ATIVOS",
    "P/CAPITAL DE GIRO",
    "P/ATIVO CIRCULANTE LÍQUIDO",
    "VPA",
    "LPA",
    "DÍVIDA LÍQUIDA/PATRIMÔNIO LÍQUIDO",
    "PASSIVOS/ATIVOS",
    "DÍVIDA BRUTA/PATRIMÔNIO LÍQUIDO",
    "LIQUIDEZ CORRENTE",
    "PATRIMÔNIO LÍQUIDO/ATIVOS",
    "DÍVIDA LÍQUIDA/EBIT",
    "EV/EBITDA",
    "QUANTIDADE DE FUNCIONÁRIOS",
    "P/RECEITA LÍQUIDA",
    "P/EBITDA",
    "DÍVIDA LÍQUIDA/EBITDA",
];

const STOCK_TABLE_PERCENTS: [&str; 14] = [
    "VARIAÇÃO DE COTAÇÃO 1 ANO",
    "FREE FLOAT",
    "TAG ALONG",
    "DIVIDEND YIELD",
    "PAYOUT",
    "ROA",
    "ROE",
    "ROIC",
    "CAGR LUCROS 5 ANOS",
    "MARGEM LÍQUIDA",
    "MARGEM BRUTA",
    "MARGEM EBIT",
    "MARGEM EBITDA",
    "CAGR RECEITAS 5 ANOS",
];

/// Brazilian stocks as laid out by investidor10.com.br/acoes.
pub fn stocks() -> SiteConfig {
    let info = ViewConfig::new("info", &STOCK_INFO)
        .renames(&STOCK_RENAMES)
        .strings(&STOCK_INFO);
    let price = ViewConfig::new("price", &STOCK_PRICE)
        .renames(&STOCK_RENAMES)
        .strings(&["VARIAÇÃO DE COTAÇÃO 1 ANO"])
        .numerics(&["COTAÇÃO"]);
    let kpi = ViewConfig::new("kpi", &STOCK_KPI)
        .renames(&STOCK_RENAMES)
        .strings(&STOCK_KPI_STRINGS)
        .numerics(&STOCK_KPI_NUMERICS);

    let table: Vec<&str> = STOCK_INFO
        .iter()
        .chain(STOCK_PRICE.iter())
        .chain(STOCK_KPI.iter())
        .copied()
        .fold(vec![], |mut columns, column| {
            if !columns.contains(&column) {
                columns.push(column);
            }
            columns
        });
    let numerics: Vec<&str> = ["COTAÇÃO"]
        .into_iter()
        .chain(STOCK_KPI_NUMERICS)
        .collect();

    SiteConfig {
        name: "investidor10-stocks".to_string(),
        rules: LabelRules::portuguese(),
        views: vec![info, price, kpi],
        table: OutputSchema::text(&table)
            .with_kind(&numerics, ColumnKind::Numeric)
            .with_kind(&STOCK_TABLE_PERCENTS, ColumnKind::Percent),
    }
}

// reits
// -------------------------------------------------------------------------------------------------

const REIT_RENAMES: [(&str, &str); 10] = [
    ("RAZÃO SOCIAL", "NOME"),
    ("LIQUIDEZ DIÁRIA", "LIQUIDEZ"),
    ("TIPO DE FUNDO", "SETOR"),
    ("TIPO DE GESTÃO", "GESTÃO"),
    ("COTAS EMITIDAS", "QUANTIDADE DE COTAS"),
    ("TAXA DE ADMINISTRAÇÃO", "TAXA ADMINISTRATIVA"),
    ("NUMERO DE COTISTAS", "QUANTIDADE DE COTISTAS"),
    ("VAL. PATRIMONIAL P/ COTA", "VALOR PATRIMONIAL/COTA"),
    ("VARIAÇÃO (12M)", "VARIAÇÃO DE COTAÇÃO 1 ANO"),
    ("MANDATO", "TIPO ANBIMA"),
];

const REIT_INFO: [&str; 9] = [
    "TICKET",
    "NOME",
    "CNPJ",
    "PÚBLICO-ALVO",
    "TIPO ANBIMA",
    "SEGMENTO",
    "SETOR",
    "PRAZO DE DURAÇÃO",
    "GESTÃO",
];

const REIT_PRICE: [&str; 5] = [
    "TICKET",
    "MOEDA",
    "COTAÇÃO",
    "VARIAÇÃO DE COTAÇÃO 1 ANO",
    "ÚLTIMO RENDIMENTO",
];

const REIT_KPI: [&str; 11] = [
    "TICKET",
    "MOEDA",
    "VALOR PATRIMONIAL/COTA",
    "VALOR PATRIMONIAL",
    "P/VP",
    "DIVIDEND YIELD",
    "LIQUIDEZ",
    "QUANTIDADE DE COTISTAS",
    "QUANTIDADE DE COTAS",
    "VACÂNCIA",
    "TAXA ADMINISTRATIVA",
];

/// Brazilian REITs (FIIs) as laid out by investidor10.com.br/fiis.
pub fn reits() -> SiteConfig {
    let info = ViewConfig::new("info", &REIT_INFO)
        .renames(&REIT_RENAMES)
        .strings(&REIT_INFO);
    let price = ViewConfig::new("price", &REIT_PRICE)
        .renames(&REIT_RENAMES)
        .strings(&["TICKET", "MOEDA", "VARIAÇÃO DE COTAÇÃO 1 ANO"])
        .numerics(&["COTAÇÃO", "ÚLTIMO RENDIMENTO"]);
    let kpi = ViewConfig::new("kpi", &REIT_KPI)
        .renames(&REIT_RENAMES)
        .strings(&[
            "TICKET",
            "MOEDA",
            "VACÂNCIA",
            "DIVIDEND YIELD",
            "TAXA ADMINISTRATIVA",
        ])
        .numerics(&[
            "QUANTIDADE DE COTISTAS",
            "QUANTIDADE DE COTAS",
            "P/VP",
            "VALOR PATRIMONIAL/COTA",
        ])
        .word_scaled(&["VALOR PATRIMONIAL"])
        .letter_scaled(&["LIQUIDEZ"]);

    let table = [
        "TICKET",
        "NOME",
        "CNPJ",
        "PÚBLICO-ALVO",
        "TIPO ANBIMA",
        "SEGMENTO",
        "SETOR",
        "PRAZO DE DURAÇÃO",
        "GESTÃO",
        "MOEDA",
        "COTAÇÃO",
        "VARIAÇÃO DE COTAÇÃO 1 ANO",
        "ÚLTIMO RENDIMENTO",
        "VALOR PATRIMONIAL/COTA",
        "VALOR PATRIMONIAL",
        "P/VP",
        "DIVIDEND YIELD",
        "LIQUIDEZ",
        "QUANTIDADE DE COTISTAS",
        "QUANTIDADE DE COTAS",
        "VACÂNCIA",
        "TAXA ADMINISTRATIVA",
    ];

    SiteConfig {
        name: "investidor10-reits".to_string(),
        rules: LabelRules::portuguese(),
        views: vec![info, price, kpi],
        table: OutputSchema::text(&table)
            .with_kind(
                &[
                    "ÚLTIMO RENDIMENTO",
                    "QUANTIDADE DE COTISTAS",
                    "P/VP",
                    "QUANTIDADE DE COTAS",
                    "VALOR PATRIMONIAL/COTA",
                    "COTAÇÃO",
                    "VALOR PATRIMONIAL",
                    "LIQUIDEZ",
                ],
                ColumnKind::Numeric,
            )
            .with_kind(
                &["VARIAÇÃO DE COTAÇÃO 1 ANO", "VACÂNCIA", "DIVIDEND YIELD"],
                ColumnKind::Percent,
            ),
    }
}

// etfs
// -------------------------------------------------------------------------------------------------

const ETF_BR_RENAMES: [(&str, &str); 4] = [
    ("DY", "DIVIDEND YIELD"),
    ("CAPITALIZAÇÃO", "VALOR DE MERCADO"),
    ("VARIAÇÃO (12M)", "VARIAÇÃO DE COTAÇÃO 1 ANO"),
    ("VARIAÇÃO (60N)", "VARIAÇÃO DE COTAÇÃO 5 ANOS"),
];

const ETF_BR_PRICE: [&str; 5] = [
    "TICKET",
    "MOEDA",
    "COTAÇÃO",
    "VARIAÇÃO DE COTAÇÃO 1 ANO",
    "VARIAÇÃO DE COTAÇÃO 5 ANOS",
];

const ETF_BR_KPI: [&str; 5] = [
    "TICKET",
    "MOEDA",
    "VALOR DE MERCADO",
    "LIQUIDEZ",
    "DIVIDEND YIELD",
];

/// Brazilian ETFs as laid out by investidor10.com.br/etfs.
pub fn etfs_br() -> SiteConfig {
    let info = ViewConfig::new("info", &["TICKET", "NOME"]).renames(&ETF_BR_RENAMES);
    let price = ViewConfig::new("price", &ETF_BR_PRICE)
        .renames(&ETF_BR_RENAMES)
        .strings(&[
            "TICKET",
            "MOEDA",
            "VARIAÇÃO DE COTAÇÃO 1 ANO",
            "VARIAÇÃO DE COTAÇÃO 5 ANOS",
        ])
        .numerics(&["COTAÇÃO"]);
    let kpi = ViewConfig::new("kpi", &ETF_BR_KPI)
        .renames(&ETF_BR_RENAMES)
        .strings(&["DIVIDEND YIELD"])
        .numerics(&["LIQUIDEZ"])
        .letter_scaled(&["VALOR DE MERCADO"]);

    let table = [
        "TICKET",
        "NOME",
        "MOEDA",
        "COTAÇÃO",
        "VARIAÇÃO DE COTAÇÃO 1 ANO",
        "VARIAÇÃO DE COTAÇÃO 5 ANOS",
        "VALOR DE MERCADO",
        "LIQUIDEZ",
        "DIVIDEND YIELD",
    ];

    SiteConfig {
        name: "investidor10-etfs-br".to_string(),
        rules: LabelRules::portuguese(),
        views: vec![info, price, kpi],
        table: OutputSchema::text(&table)
            .with_kind(
                &["COTAÇÃO", "VALOR DE MERCADO", "LIQUIDEZ"],
                ColumnKind::Numeric,
            )
            .with_kind(
                &[
                    "VARIAÇÃO DE COTAÇÃO 1 ANO",
                    "VARIAÇÃO DE COTAÇÃO 5 ANOS",
                    "DIVIDEND YIELD",
                ],
                ColumnKind::Percent,
            ),
    }
}

const ETF_RENAMES: [(&str, &str); 5] = [
    ("COTAÇÃO", "COTAÇÃO USD"),
    ("DY", "DIVIDEND YIELD"),
    ("CAPITALIZAÇÃO", "VALOR DE MERCADO USD"),
    ("VARIAÇÃO (12M)", "VARIAÇÃO DE COTAÇÃO USD 1 ANO"),
    ("VARIAÇÃO (60N)", "VARIAÇÃO DE COTAÇÃO USD 5 ANOS"),
];

const ETF_PRICE: [&str; 6] = [
    "TICKET",
    "MOEDA",
    "COTAÇÃO BRL",
    "COTAÇÃO USD",
    "VARIAÇÃO DE COTAÇÃO USD 1 ANO",
    "VARIAÇÃO DE COTAÇÃO USD 5 ANOS",
];

const ETF_KPI: [&str; 5] = [
    "TICKET",
    "MOEDA",
    "VALOR DE MERCADO USD",
    "LIQUIDEZ USD",
    "DIVIDEND YIELD",
];

/// Global ETFs, quoted in dollars, as laid out by investidor10.com.br/etfs-global.
pub fn etfs() -> SiteConfig {
    let info = ViewConfig::new("info", &["TICKET", "NOME"]).renames(&ETF_RENAMES);
    let price = ViewConfig::new("price", &ETF_PRICE)
        .renames(&ETF_RENAMES)
        .strings(&[
            "TICKET",
            "MOEDA",
            "VARIAÇÃO DE COTAÇÃO USD 1 ANO",
            "VARIAÇÃO DE COTAÇÃO USD 5 ANOS",
        ])
        .numerics(&["COTAÇÃO BRL", "COTAÇÃO USD"]);
    let kpi = ViewConfig::new("kpi", &ETF_KPI)
        .renames(&ETF_RENAMES)
        .strings(&["TICKET", "MOEDA", "DIVIDEND YIELD"])
        .numerics(&["LIQUIDEZ USD"])
        .letter_scaled(&["VALOR DE MERCADO USD"]);

    let table = [
        "TICKET",
        "NOME",
        "MOEDA",
        "COTAÇÃO BRL",
        "COTAÇÃO USD",
        "VARIAÇÃO DE COTAÇÃO USD 1 ANO",
        "VARIAÇÃO DE COTAÇÃO USD 5 ANOS",
        "VALOR DE MERCADO USD",
        "LIQUIDEZ USD",
        "DIVIDEND YIELD",
    ];

    SiteConfig {
        name: "investidor10-etfs".to_string(),
        rules: LabelRules::portuguese(),
        views: vec![info, price, kpi],
        table: OutputSchema::text(&table)
            .with_kind(
                &[
                    "COTAÇÃO BRL",
                    "COTAÇÃO USD",
                    "VALOR DE MERCADO USD",
                    "LIQUIDEZ USD",
                ],
                ColumnKind::Numeric,
            )
            .with_kind(
                &[
                    "VARIAÇÃO DE COTAÇÃO USD 1 ANO",
                    "VARIAÇÃO DE COTAÇÃO USD 5 ANOS",
                    "DIVIDEND YIELD",
                ],
                ColumnKind::Percent,
            ),
    }
}
