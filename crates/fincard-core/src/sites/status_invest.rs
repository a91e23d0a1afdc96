use crate::cards::LabelRules;
use crate::config::{ColumnKind, OutputSchema, SiteConfig, ViewConfig};

// reits
// -------------------------------------------------------------------------------------------------

const REIT_RENAMES: [(&str, &str); 23] = [
    ("VALOR ATUAL", "COTAÇÃO"),
    ("MIN. 52 SEMANAS", "COTAÇÃO MÍNIMA 1 ANO"),
    ("MÁX. 52 SEMANAS", "COTAÇÃO MÁXIMA 1 ANO"),
    ("VALORIZAÇÃO (12M)", "VALORIZAÇÃO DE COTAÇÃO 1 ANO"),
    ("MIN. MÊS", "COTAÇÃO MÍNIMA 1 MÊS"),
    ("MÁX. MÊS", "COTAÇÃO MÁXIMA 1 MÊS"),
    ("MÊS ATUAL", "VALORIZAÇÃO DE COTAÇÃO 1 MÊS"),
    ("TOTAL", "VALOR EM CAIXA"),
    ("VALOR EM CAIXA", "VALOR EM CAIXA %"),
    ("Nº DE COTAS", "QUANTIDADE DE COTAS"),
    ("Nº DE COTISTAS", "QUANTIDADE DE COTISTAS"),
    ("TIPO DA GESTÃO", "GESTÃO"),
    ("LIQUIDEZ MÉDIA DIÁRIA", "LIQUIDEZ"),
    ("ÚLTIMOS 12 MESES", "DIVIDENDOS PAGOS 1 ANO"),
    ("VAL. PATRIMONIAL P/COTA", "VALOR PATRIMONIAL/COTA"),
    ("NOME PREGÃO", "NOME"),
    ("VALOR MERCADO", "VALOR DE MERCADO"),
    ("DY CAGR(5 ANOS)", "CAGR DIVIDENDOS 5 ANOS"),
    ("VALOR CAGR(5 ANOS)", "CAGR 5 ANOS"),
    ("ÍNICIO DO FUNDO", "DATA DE CRIAÇÃO"),
    ("PATRIMÔNIO", "VALOR PATRIMONIAL"),
    ("RENDIM. MÉDIO (24M)", "RENDIMENTO MÉDIO 2 ANOS"),
    ("TAXAS ADMINISTRAÇÃO", "TAXA ADMINISTRATIVA"),
];

const REIT_INFO: [&str; 11] = [
    "TICKET",
    "NOME",
    "CNPJ",
    "DATA DE CRIAÇÃO",
    "ADMINISTRADOR",
    "GESTÃO",
    "TIPO ANBIMA",
    "SEGMENTO ANBIMA",
    "SEGMENTO",
    "PÚBLICO-ALVO",
    "PRAZO DE DURAÇÃO",
];

const REIT_PRICE: [&str; 11] = [
    "TICKET",
    "MOEDA",
    "COTAÇÃO",
    "COTAÇÃO MÍNIMA 1 MÊS",
    "COTAÇÃO MÁXIMA 1 MÊS",
    "VALORIZAÇÃO DE COTAÇÃO 1 MÊS",
    "COTAÇÃO MÍNIMA 1 ANO",
    "COTAÇÃO MÁXIMA 1 ANO",
    "VALORIZAÇÃO DE COTAÇÃO 1 ANO",
    "DIVIDENDOS PAGOS 1 ANO",
    "RENDIMENTO MÉDIO 2 ANOS",
];

const REIT_PRICE_NUMERICS: [&str; 7] = [
    "COTAÇÃO",
    "COTAÇÃO MÍNIMA 1 ANO",
    "COTAÇÃO MÁXIMA 1 ANO",
    "COTAÇÃO MÍNIMA 1 MÊS",
    "COTAÇÃO MÁXIMA 1 MÊS",
    "DIVIDENDOS PAGOS 1 ANO",
    "RENDIMENTO MÉDIO 2 ANOS",
];

const REIT_KPI: [&str; 17] = [
    "TICKET",
    "MOEDA",
    "VALOR DE MERCADO",
    "VALOR PATRIMONIAL",
    "P/VP",
    "LIQUIDEZ",
    "DIVIDEND YIELD",
    "VALOR PATRIMONIAL/COTA",
    "VALOR EM CAIXA",
    "VALOR EM CAIXA %",
    "CAGR 5 ANOS",
    "CAGR 3 ANOS",
    "CAGR DIVIDENDOS 5 ANOS",
    "CAGR DIVIDENDOS 3 ANOS",
    "QUANTIDADE DE COTAS",
    "QUANTIDADE DE COTISTAS",
    "TAXA ADMINISTRATIVA",
];

const REIT_KPI_NUMERICS: [&str; 12] = [
    "LIQUIDEZ",
    "VALOR PATRIMONIAL/COTA",
    "P/VP",
    "VALOR EM CAIXA",
    "CAGR DIVIDENDOS 3 ANOS",
    "CAGR 3 ANOS",
    "QUANTIDADE DE COTISTAS",
    "VALOR PATRIMONIAL",
    "CAGR 5 ANOS",
    "VALOR DE MERCADO",
    "QUANTIDADE DE COTAS",
    "CAGR DIVIDENDOS 5 ANOS",
];

const REIT_TABLE_PERCENTS: [&str; 5] = [
    "VALORIZAÇÃO DE COTAÇÃO 1 ANO",
    "VALORIZAÇÃO DE COTAÇÃO 1 MÊS",
    "DIVIDEND YIELD",
    "VALOR EM CAIXA %",
    "TAXA ADMINISTRATIVA",
];

/// Brazilian REITs (FIIs) as laid out by statusinvest.com.br/fundos-imobiliarios.
pub fn reits() -> SiteConfig {
    let info_strings: Vec<&str> = REIT_INFO
        .into_iter()
        .filter(|column| *column != "DATA DE CRIAÇÃO")
        .collect();
    let info = ViewConfig::new("info", &REIT_INFO)
        .renames(&REIT_RENAMES)
        .strings(&info_strings)
        .dates(&["DATA DE CRIAÇÃO"]);
    let price = ViewConfig::new("price", &REIT_PRICE)
        .renames(&REIT_RENAMES)
        .strings(&[
            "TICKET",
            "MOEDA",
            "VALORIZAÇÃO DE COTAÇÃO 1 ANO",
            "VALORIZAÇÃO DE COTAÇÃO 1 MÊS",
        ])
        .numerics(&REIT_PRICE_NUMERICS);
    let kpi = ViewConfig::new("kpi", &REIT_KPI)
        .renames(&REIT_RENAMES)
        .strings(&["TICKET", "MOEDA", "TAXA ADMINISTRATIVA"])
        .percents(&["DIVIDEND YIELD", "VALOR EM CAIXA %"])
        .numerics(&REIT_KPI_NUMERICS);

    let table: Vec<&str> = REIT_INFO
        .iter()
        .chain(REIT_PRICE.iter())
        .chain(REIT_KPI.iter())
        .copied()
        .fold(vec![], |mut columns, column| {
            if !columns.contains(&column) {
                columns.push(column);
            }
            columns
        });
    let numerics: Vec<&str> = REIT_PRICE_NUMERICS
        .into_iter()
        .chain(REIT_KPI_NUMERICS)
        .collect();

    SiteConfig {
        name: "statusinvest-reits".to_string(),
        rules: LabelRules::status_invest(),
        views: vec![info, price, kpi],
        table: OutputSchema::text(&table)
            .with_kind(&numerics, ColumnKind::Numeric)
            .with_kind(&REIT_TABLE_PERCENTS, ColumnKind::Percent),
    }
}
